use anyhow::{Context, Result};
use cardtable_client::Client;
use cardtable_types::format_hand;
use clap::Parser;
use tracing::info;

const DEFAULT_PLAYERS: [&str; 4] = ["jackson", "ian", "ben", "bel"];

/// Plays one scripted round against a running cardtable server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server base URL.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    url: String,

    /// Player names to register (defaults to four seats).
    #[arg(long = "player")]
    players: Vec<String>,

    /// Leave the table populated instead of clearing it at the end.
    #[arg(long)]
    keep: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    let args = Args::parse();

    let client = Client::new(&args.url).context("invalid server url")?;
    let names: Vec<String> = if args.players.is_empty() {
        DEFAULT_PLAYERS.iter().map(|name| name.to_string()).collect()
    } else {
        args.players.clone()
    };

    let mut ids = Vec::with_capacity(names.len());
    for name in &names {
        let id = client
            .register(name)
            .await
            .with_context(|| format!("register {name}"))?;
        println!("{name}: {id}");
        ids.push(id);
    }
    info!(players = client.check_players().await?, "table ready");

    client.start().await.context("start round")?;

    let first = ids.first().context("no players registered")?;
    let hand = client.get_hand(first).await?;
    println!("{} hand: {}", names[0], format_hand(&hand));

    let card = hand.first().context("empty hand")?;
    match client.play_card(first, card).await? {
        Some(played) => println!("{} played {played}", names[0]),
        None => println!("{} could not play {card}", names[0]),
    }
    let hand = client.get_hand(first).await?;
    println!("{} hand: {}", names[0], format_hand(&hand));

    if !args.keep {
        client.clear().await.context("clear table")?;
        info!("table cleared");
    }
    Ok(())
}
