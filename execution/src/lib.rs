//! Cardtable execution layer.
//!
//! This crate holds the game-session core: the [`Deck`] (build, shuffle, deal), the
//! [`Registry`] of players for one epoch, the [`Game`] lifecycle state machine, and
//! [`Table`], the lock-guarded handle shared by request handlers.
//!
//! ## Invariants
//! - A fresh deck holds 52 distinct cards; dealt cards leave the deck and land in exactly
//!   one hand.
//! - Every failing operation returns before mutating anything.
//! - Hands are stored sorted by suit, then rank.
//!
//! ## Example
//! ```rust
//! use cardtable_execution::Table;
//!
//! let table = Table::new(13, Some(7));
//! let id = table.register("ben").unwrap();
//! assert!(table.get_hand(&id).unwrap().is_empty());
//! table.start().unwrap();
//! assert_eq!(table.get_hand(&id).unwrap().len(), 13);
//! ```

pub mod deck;
mod error;
pub mod game;
pub mod registry;
mod table;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use deck::{sort_for_display, Deck};
pub use error::{GameError, GameResult};
pub use game::Game;
pub use registry::{Player, Registry};
pub use table::Table;
