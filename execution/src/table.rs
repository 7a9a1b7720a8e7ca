//! Shared, lock-guarded handle around one [`Game`] epoch.
//!
//! Every mutation (`register`, `start`, `play_card`, `reset`) takes the write lock, so a
//! deal always sees the same player count it checked against. Hand queries take the read
//! lock and may run concurrently; they never observe a partially assigned hand.

use cardtable_types::{Card, GamePhase, PlayerId, DEFAULT_HAND_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

use crate::game::Game;
use crate::GameResult;

struct TableState {
    game: Game,
    rng: StdRng,
}

pub struct Table {
    state: RwLock<TableState>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(DEFAULT_HAND_SIZE, None)
    }
}

impl Table {
    /// Creates an empty table. A `seed` makes every shuffle reproducible.
    pub fn new(hand_size: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: RwLock::new(TableState {
                game: Game::new(hand_size),
                rng,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, TableState> {
        match self.state.read() {
            Ok(state) => state,
            Err(poisoned) => {
                warn!("table lock poisoned; recovering");
                poisoned.into_inner()
            }
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, TableState> {
        match self.state.write() {
            Ok(state) => state,
            Err(poisoned) => {
                warn!("table lock poisoned; recovering");
                poisoned.into_inner()
            }
        }
    }

    pub fn register(&self, name: &str) -> GameResult<PlayerId> {
        let mut state = self.write();
        let id = state.game.register(name)?;
        info!(player = %id, name, players = state.game.player_count(), "player registered");
        Ok(id)
    }

    pub fn start(&self) -> GameResult<usize> {
        let mut state = self.write();
        let TableState { game, rng } = &mut *state;
        let dealt = game.start(rng)?;
        info!(players = dealt, hand_size = game.hand_size(), "hands dealt");
        Ok(dealt)
    }

    /// Returns a copy of the player's current hand (empty before the deal).
    pub fn get_hand(&self, id: &PlayerId) -> GameResult<Vec<Card>> {
        self.read().game.get_hand(id).map(<[Card]>::to_vec)
    }

    pub fn play_card(&self, id: &PlayerId, card: &Card) -> GameResult<Card> {
        let mut state = self.write();
        let played = state.game.play_card(id, card)?;
        info!(player = %id, card = %played, "card played");
        Ok(played)
    }

    pub fn reset(&self) {
        let mut state = self.write();
        let cleared = state.game.player_count();
        state.game.reset();
        info!(cleared, "table reset");
    }

    pub fn player_count(&self) -> usize {
        self.read().game.player_count()
    }

    pub fn phase(&self) -> GamePhase {
        self.read().game.phase()
    }

    pub fn hand_size(&self) -> usize {
        self.read().game.hand_size()
    }
}
