use cardtable_types::{Card, PlayerId};
use thiserror::Error;

/// Failures of deck, registry and lifecycle operations.
///
/// Every variant is returned before any state is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("not enough cards in the deck: {requested} requested, {available} available")]
    InsufficientCards { requested: usize, available: usize },
    #[error("card not in hand: {0}")]
    CardNotInHand(Card),
    #[error("cards have not been dealt")]
    NotDealt,
    #[error("no players registered")]
    NoPlayers,
    #[error("registration is closed while a game is dealt")]
    RegistrationClosed,
}

pub type GameResult<T> = Result<T, GameError>;
