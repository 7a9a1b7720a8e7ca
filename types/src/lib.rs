//! Common types shared by the cardtable execution layer, server and client.

pub mod api;
mod card;
mod player;

pub use card::{
    format_hand, Card, CardParseError, Suit, CARDS_PER_DECK, DEFAULT_HAND_SIZE, RANKS_PER_SUIT,
};
pub use player::{GamePhase, PlayerId, PlayerPhase};
