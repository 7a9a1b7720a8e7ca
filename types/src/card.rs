//! Playing cards.
//!
//! A [`Card`] is a `(suit, rank)` pair with rank in `1..=13` (Ace low). Cards order by
//! suit first, in [`Suit`] declaration order, then by ascending rank. That ordering is
//! the display order used for dealt hands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Total cards in a standard deck.
pub const CARDS_PER_DECK: usize = 52;

/// Cards dealt to each player when a game starts.
pub const DEFAULT_HAND_SIZE: usize = 13;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("invalid rank: {0:?} (expected 1..=13)")]
    InvalidRank(String),
    #[error("invalid suit: {0:?} (expected Hearts, Diamonds, Spades or Clubs)")]
    InvalidSuit(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in deck construction (and display) order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hearts" => Ok(Suit::Hearts),
            "diamonds" => Ok(Suit::Diamonds),
            "spades" => Ok(Suit::Spades),
            "clubs" => Ok(Suit::Clubs),
            _ => Err(CardParseError::InvalidSuit(value.to_string())),
        }
    }
}

/// An immutable playing card.
///
/// Field order matters: the derived `Ord` compares `suit` before `rank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Returns `None` if `rank` is outside `1..=13`.
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        (1..=RANKS_PER_SUIT)
            .contains(&rank)
            .then_some(Self { suit, rank })
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// 1-based rank, where 1 is Ace and 13 is King.
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Parses the textual `(rank, suit)` pair used on the wire.
    pub fn parse(rank: &str, suit: &str) -> Result<Self, CardParseError> {
        let suit = suit.parse::<Suit>()?;
        let parsed = rank
            .trim()
            .parse::<u8>()
            .map_err(|_| CardParseError::InvalidRank(rank.to_string()))?;
        Card::new(suit, parsed).ok_or_else(|| CardParseError::InvalidRank(rank.to_string()))
    }

    /// The wire encoding: `(rank as string, suit as string)`.
    pub fn to_wire(&self) -> (String, String) {
        (self.rank.to_string(), self.suit.as_str().to_string())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Renders a hand for plain-text display, e.g. `|1 of Hearts||12 of Clubs|`.
pub fn format_hand(hand: &[Card]) -> String {
    let mut out = String::with_capacity(hand.len().saturating_mul(16));
    for card in hand {
        out.push('|');
        out.push_str(&card.to_string());
        out.push('|');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert!(Card::new(Suit::Hearts, 0).is_none());
        assert!(Card::new(Suit::Hearts, 14).is_none());
        assert_eq!(Card::new(Suit::Clubs, 13).map(|c| c.rank()), Some(13));
    }

    #[test]
    fn test_ordering_is_suit_then_rank() {
        let ace_hearts = Card::new(Suit::Hearts, 1).unwrap();
        let king_hearts = Card::new(Suit::Hearts, 13).unwrap();
        let ace_diamonds = Card::new(Suit::Diamonds, 1).unwrap();
        let two_clubs = Card::new(Suit::Clubs, 2).unwrap();

        assert!(ace_hearts < king_hearts);
        assert!(king_hearts < ace_diamonds);
        assert!(ace_diamonds < two_clubs);
    }

    #[test]
    fn test_parse_wire_pair() {
        let card = Card::parse("12", "spades").unwrap();
        assert_eq!(card, Card::new(Suit::Spades, 12).unwrap());
        assert_eq!(card.to_wire(), ("12".to_string(), "Spades".to_string()));

        assert_eq!(
            Card::parse("0", "Hearts"),
            Err(CardParseError::InvalidRank("0".to_string()))
        );
        assert_eq!(
            Card::parse("Q", "Hearts"),
            Err(CardParseError::InvalidRank("Q".to_string()))
        );
        assert_eq!(
            Card::parse("3", "Stars"),
            Err(CardParseError::InvalidSuit("Stars".to_string()))
        );
    }

    #[test]
    fn test_display_and_format_hand() {
        let hand = [
            Card::new(Suit::Hearts, 1).unwrap(),
            Card::new(Suit::Clubs, 12).unwrap(),
        ];
        assert_eq!(hand[0].to_string(), "1 of Hearts");
        assert_eq!(format_hand(&hand), "|1 of Hearts||12 of Clubs|");
        assert_eq!(format_hand(&[]), "");
    }
}
