use anyhow::{Context, Result};
use cardtable_simulator::{Api, Simulator, SimulatorConfig};
use clap::Parser;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn otlp_exporter(endpoint: String) -> Result<opentelemetry_otlp::SpanExporter> {
    opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_endpoint(endpoint)
        .build()
        .context("failed to build OTLP exporter")
}

fn init_tracing() -> Result<()> {
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .and_then(|value| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        });

    if let Some(endpoint) = endpoint {
        let service_name = std::env::var("OTEL_SERVICE_NAME")
            .unwrap_or_else(|_| "cardtable-simulator".to_string());
        let rate = std::env::var("OTEL_SAMPLING_RATE")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .map(|value| value.clamp(0.0, 1.0))
            .unwrap_or(1.0);
        let exporter = otlp_exporter(endpoint)?;
        let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
            .with_sampler(opentelemetry_sdk::trace::Sampler::TraceIdRatioBased(rate))
            .with_resource(
                opentelemetry_sdk::Resource::builder_empty()
                    .with_attributes([opentelemetry::KeyValue::new("service.name", service_name)])
                    .build(),
            )
            .with_batch_exporter(exporter)
            .build();
        let tracer = tracer_provider.tracer("cardtable-simulator");
        opentelemetry::global::set_tracer_provider(tracer_provider);

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(LevelFilter::INFO))
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host interface to bind (default: localhost).
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Cards dealt to each player on start (1..=52).
    #[arg(long)]
    hand_size: Option<usize>,

    /// Seed for reproducible shuffles (optional).
    #[arg(long)]
    deterministic_seed: Option<u64>,

    /// Max request body size in bytes (0 removes the limit).
    #[arg(long)]
    http_body_limit_bytes: Option<usize>,
}

/// Maps an optional arg value to Option: 0 => None, Some(v) => Some(v), None => default
fn map_optional_limit(arg: Option<usize>, default: Option<usize>) -> Option<usize> {
    match arg {
        Some(0) => None,
        Some(v) => Some(v),
        None => default,
    }
}

fn build_config(args: &Args) -> Result<SimulatorConfig> {
    let defaults = SimulatorConfig::default();
    let config = SimulatorConfig {
        hand_size: args.hand_size.unwrap_or(defaults.hand_size),
        deterministic_seed: args.deterministic_seed.or(defaults.deterministic_seed),
        http_body_limit_bytes: map_optional_limit(
            args.http_body_limit_bytes,
            defaults.http_body_limit_bytes,
        ),
    };
    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    init_tracing()?;

    let config = build_config(&args)?;
    info!(
        hand_size = config.hand_size,
        max_players = config.max_players(),
        seeded = config.deterministic_seed.is_some(),
        "table configured"
    );

    let simulator = Arc::new(Simulator::new_with_config(config));
    let api = Api::new(simulator);
    let app = api.router();

    // Start server
    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("axum server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_config_fields() {
        let args = Args::parse_from([
            "simulator",
            "--hand-size",
            "5",
            "--deterministic-seed",
            "7",
            "--http-body-limit-bytes",
            "0",
        ]);
        let config = build_config(&args).expect("config should parse");
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.deterministic_seed, Some(7));
        assert_eq!(config.http_body_limit_bytes, None);
        assert_eq!(args.port, 5000);
    }

    #[test]
    fn builds_otlp_exporter_for_endpoint() {
        assert!(otlp_exporter("http://127.0.0.1:4318/v1/traces".to_string()).is_ok());
    }

    #[test]
    fn rejects_oversized_hand() {
        let args = Args::parse_from(["simulator", "--hand-size", "53"]);
        let err = build_config(&args).unwrap_err();
        assert!(err.to_string().contains("hand_size"), "unexpected error: {err}");
    }
}
