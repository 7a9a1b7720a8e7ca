//! Game lifecycle: `WaitingForPlayers -> Dealt -> WaitingForPlayers`.
//!
//! [`Game`] is the single-threaded state machine. Callers that share it across requests
//! go through [`crate::Table`], which serializes every mutation behind one lock.
//!
//! Policies:
//! - `start` with no players fails with [`GameError::NoPlayers`].
//! - `start` while already dealt re-deals every hand from a fresh deck.
//! - Registration is only accepted while waiting for players.
//! - There is no turn order; any dealt player may play at any time.

use cardtable_types::{Card, GamePhase, PlayerId, CARDS_PER_DECK, DEFAULT_HAND_SIZE};
use rand::Rng;
use tracing::debug;

use crate::deck::{sort_for_display, Deck};
use crate::registry::Registry;
use crate::{GameError, GameResult};

#[derive(Clone, Debug)]
pub struct Game {
    registry: Registry,
    phase: GamePhase,
    hand_size: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_HAND_SIZE)
    }
}

impl Game {
    pub fn new(hand_size: usize) -> Self {
        Self {
            registry: Registry::new(),
            phase: GamePhase::WaitingForPlayers,
            hand_size,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn player_count(&self) -> usize {
        self.registry.player_count()
    }

    pub fn register(&mut self, name: impl Into<String>) -> GameResult<PlayerId> {
        if self.phase != GamePhase::WaitingForPlayers {
            return Err(GameError::RegistrationClosed);
        }
        Ok(self.registry.register(name))
    }

    /// Shuffles a fresh deck and deals one sorted hand per registered player, in
    /// registration order. Returns the number of hands dealt.
    ///
    /// Both the player check and the card-count check run before any hand is assigned.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<usize> {
        let players = self.registry.player_count();
        if players == 0 {
            return Err(GameError::NoPlayers);
        }
        let requested = players.saturating_mul(self.hand_size);
        if requested > CARDS_PER_DECK {
            return Err(GameError::InsufficientCards {
                requested,
                available: CARDS_PER_DECK,
            });
        }

        let mut deck = Deck::new();
        deck.shuffle(rng);
        let hands = deck.deal(players, self.hand_size)?;

        let ids = self.registry.ids().to_vec();
        for (id, hand) in ids.iter().zip(hands) {
            self.registry.assign_hand(id, sort_for_display(hand))?;
        }
        if self.phase == GamePhase::Dealt {
            debug!(players, "re-dealt hands");
        }
        self.phase = GamePhase::Dealt;
        Ok(players)
    }

    pub fn get_hand(&self, id: &PlayerId) -> GameResult<&[Card]> {
        self.registry.get_hand(id)
    }

    pub fn play_card(&mut self, id: &PlayerId, card: &Card) -> GameResult<Card> {
        if self.phase != GamePhase::Dealt {
            return Err(GameError::NotDealt);
        }
        self.registry.remove_card(id, card)
    }

    pub fn reset(&mut self) {
        self.registry.reset();
        self.phase = GamePhase::WaitingForPlayers;
    }
}
