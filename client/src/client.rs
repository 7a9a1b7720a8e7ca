use cardtable_types::{
    api::{hand_from_wire, PlayCardRequest, ReadyRequest, Registration, WireCard},
    Card, PlayerId,
};
use reqwest::Response;
use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// Async client for the cardtable HTTP API.
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        match base_url.scheme() {
            "http" | "https" => {}
            other => return Err(Error::InvalidScheme(other.to_string())),
        }
        // Keep relative joins under the configured path.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if body.is_empty() {
            Err(Error::Failed(status))
        } else {
            Err(Error::FailedWithBody { status, body })
        }
    }

    /// Registers a player and returns the issued identifier.
    pub async fn register(&self, name: &str) -> Result<PlayerId> {
        let response = self
            .http
            .post(self.url("ready")?)
            .json(&ReadyRequest {
                name: name.to_string(),
            })
            .send()
            .await?;
        let body = Self::check(response).await?.text().await?;
        let registration: Registration =
            serde_json::from_str(&body).map_err(|_| Error::UnexpectedResponse)?;
        let id = registration
            .into_keys()
            .next()
            .ok_or(Error::UnexpectedResponse)?;
        debug!(player = %id, name, "registered");
        Ok(id)
    }

    /// Deals hands to every registered player.
    pub async fn start(&self) -> Result<()> {
        let response = self.http.get(self.url("start")?).send().await?;
        let body = Self::check(response).await?.text().await?;
        if body.trim() != "true" {
            return Err(Error::UnexpectedResponse);
        }
        Ok(())
    }

    /// Fetches a player's hand, sorted by suit then rank. Empty before the deal.
    pub async fn get_hand(&self, id: &PlayerId) -> Result<Vec<Card>> {
        let response = self
            .http
            .get(self.url(&format!("gethands/{id}"))?)
            .send()
            .await?;
        let body = Self::check(response).await?.text().await?;
        let wire: Vec<WireCard> =
            serde_json::from_str(&body).map_err(|_| Error::UnexpectedResponse)?;
        hand_from_wire(&wire).map_err(|_| Error::UnexpectedResponse)
    }

    /// Plays `card` from the player's hand.
    ///
    /// Returns `None` when the card is not in the hand.
    pub async fn play_card(&self, id: &PlayerId, card: &Card) -> Result<Option<Card>> {
        let response = self
            .http
            .post(self.url(&format!("playcard/{id}"))?)
            .json(&PlayCardRequest::from_card(card))
            .send()
            .await?;
        let body = Self::check(response).await?.text().await?;
        if body.trim() == "false" {
            return Ok(None);
        }
        let (rank, suit): WireCard =
            serde_json::from_str(&body).map_err(|_| Error::UnexpectedResponse)?;
        let played = Card::parse(&rank, &suit).map_err(|_| Error::UnexpectedResponse)?;
        Ok(Some(played))
    }

    /// Clears every player and returns the table to waiting for players.
    pub async fn clear(&self) -> Result<()> {
        let response = self.http.get(self.url("clear")?).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn check_players(&self) -> Result<usize> {
        let response = self.http.get(self.url("checkplayers")?).send().await?;
        let body = Self::check(response).await?.text().await?;
        body.trim()
            .parse()
            .map_err(|_| Error::UnexpectedResponse)
    }

    /// Fetches the plain-text preview deal.
    pub async fn draw_cards(&self) -> Result<String> {
        let response = self.http.get(self.url("drawcards")?).send().await?;
        Ok(Self::check(response).await?.text().await?)
    }
}
