//! Request and response bodies exchanged over HTTP.
//!
//! A card travels as the pair `(rank, suit)`, both as strings: `["12", "Spades"]`.

use crate::{Card, CardParseError, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire encoding of a single card.
pub type WireCard = (String, String);

/// Body of `POST /ready`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyRequest {
    pub name: String,
}

/// Echo information returned for a fresh registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
}

/// Response of `POST /ready`: a single-entry map from the issued identifier to its echo.
pub type Registration = BTreeMap<PlayerId, PlayerInfo>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankField {
    Number(u8),
    Text(String),
}

/// Body of `POST /playcard/{id}`.
///
/// Accepts the pair shape returned by the hand query as well as an object with named
/// fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayCardRequest {
    Pair(String, String),
    Fields { rank: RankField, suit: String },
}

impl PlayCardRequest {
    pub fn from_card(card: &Card) -> Self {
        let (rank, suit) = card.to_wire();
        Self::Pair(rank, suit)
    }

    pub fn card(&self) -> Result<Card, CardParseError> {
        match self {
            Self::Pair(rank, suit) => Card::parse(rank, suit),
            Self::Fields {
                rank: RankField::Number(rank),
                suit,
            } => Card::parse(&rank.to_string(), suit),
            Self::Fields {
                rank: RankField::Text(rank),
                suit,
            } => Card::parse(rank, suit),
        }
    }
}

pub fn hand_to_wire(hand: &[Card]) -> Vec<WireCard> {
    hand.iter().map(Card::to_wire).collect()
}

pub fn hand_from_wire(hand: &[WireCard]) -> Result<Vec<Card>, CardParseError> {
    hand.iter()
        .map(|(rank, suit)| Card::parse(rank, suit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    #[test]
    fn test_play_card_request_shapes() {
        let expected = Card::new(Suit::Diamonds, 7).unwrap();

        let pair: PlayCardRequest = serde_json::from_str(r#"["7","Diamonds"]"#).unwrap();
        assert_eq!(pair.card().unwrap(), expected);

        let fields: PlayCardRequest =
            serde_json::from_str(r#"{"rank":"7","suit":"Diamonds"}"#).unwrap();
        assert_eq!(fields.card().unwrap(), expected);

        let numeric: PlayCardRequest =
            serde_json::from_str(r#"{"rank":7,"suit":"diamonds"}"#).unwrap();
        assert_eq!(numeric.card().unwrap(), expected);

        let bad: PlayCardRequest = serde_json::from_str(r#"["15","Diamonds"]"#).unwrap();
        assert!(matches!(bad.card(), Err(CardParseError::InvalidRank(_))));
    }

    #[test]
    fn test_play_card_request_from_card_is_pair() {
        let card = Card::new(Suit::Clubs, 11).unwrap();
        let body = serde_json::to_string(&PlayCardRequest::from_card(&card)).unwrap();
        assert_eq!(body, r#"["11","Clubs"]"#);
    }

    #[test]
    fn test_registration_keys_by_identifier() {
        let id = PlayerId::generate();
        let mut registration = Registration::new();
        registration.insert(
            id,
            PlayerInfo {
                name: "ben".to_string(),
            },
        );
        let body = serde_json::to_string(&registration).unwrap();
        assert_eq!(body, format!(r#"{{"{id}":{{"name":"ben"}}}}"#));

        let decoded: Registration = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded, registration);
    }

    #[test]
    fn test_hand_wire_conversion() {
        let hand = vec![
            Card::new(Suit::Hearts, 1).unwrap(),
            Card::new(Suit::Spades, 13).unwrap(),
        ];
        let wire = hand_to_wire(&hand);
        assert_eq!(
            serde_json::to_string(&wire).unwrap(),
            r#"[["1","Hearts"],["13","Spades"]]"#
        );
        assert_eq!(hand_from_wire(&wire).unwrap(), hand);
    }
}
