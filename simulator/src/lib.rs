//! Local HTTP backend for cardtable.
//!
//! [`Simulator`] owns the one [`Table`] for the running process plus request metrics;
//! [`Api`] exposes it over axum.

use cardtable_execution::{sort_for_display, Deck, GameResult, Table};
use cardtable_types::Card;

mod api;
pub use api::Api;

mod metrics;
pub use metrics::{HttpMetrics, HttpMetricsSnapshot, LatencySnapshot};

mod state;
pub use state::SimulatorConfig;

/// Hands dealt by the stateless `/drawcards` preview.
pub const PREVIEW_HANDS: usize = 4;

pub struct Simulator {
    pub config: SimulatorConfig,
    table: Table,
    http_metrics: HttpMetrics,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self::new_with_config(SimulatorConfig::default())
    }

    pub fn new_with_config(config: SimulatorConfig) -> Self {
        let table = Table::new(config.hand_size, config.deterministic_seed);
        Self {
            config,
            table,
            http_metrics: HttpMetrics::default(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn http_metrics(&self) -> &HttpMetrics {
        &self.http_metrics
    }

    pub fn http_metrics_snapshot(&self) -> HttpMetricsSnapshot {
        self.http_metrics.snapshot()
    }

    /// Deals [`PREVIEW_HANDS`] sorted hands from a fresh deck without touching the table.
    pub fn preview_hands(&self) -> GameResult<Vec<Vec<Card>>> {
        let mut deck = Deck::new();
        deck.shuffle(&mut rand::thread_rng());
        let hands = deck.deal(PREVIEW_HANDS, self.config.hand_size)?;
        Ok(hands.into_iter().map(sort_for_display).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtable_execution::{mocks::register_players, GameError};
    use cardtable_types::GamePhase;
    use std::collections::HashSet;

    #[test]
    fn test_preview_hands_leave_table_untouched() {
        let simulator = Simulator::new();
        let id = simulator.table().register("ben").unwrap();

        let hands = simulator.preview_hands().unwrap();
        assert_eq!(hands.len(), PREVIEW_HANDS);
        let unique: HashSet<Card> = hands.iter().flatten().copied().collect();
        assert_eq!(unique.len(), 52);

        assert_eq!(simulator.table().player_count(), 1);
        assert!(simulator.table().get_hand(&id).unwrap().is_empty());
    }

    #[test]
    fn test_seeded_simulators_deal_identically() {
        let config = SimulatorConfig {
            deterministic_seed: Some(11),
            ..SimulatorConfig::default()
        };
        let first = Simulator::new_with_config(config.clone());
        let second = Simulator::new_with_config(config);
        let names = ["jackson", "ian", "ben", "bel"];
        let first_ids = register_players(first.table(), &names);
        let second_ids = register_players(second.table(), &names);
        first.table().start().unwrap();
        second.table().start().unwrap();

        assert_eq!(first.table().phase(), GamePhase::Dealt);
        for (a, b) in first_ids.iter().zip(&second_ids) {
            assert_eq!(
                first.table().get_hand(a).unwrap(),
                second.table().get_hand(b).unwrap()
            );
        }
    }

    #[test]
    fn test_preview_respects_hand_size() {
        let simulator = Simulator::new_with_config(SimulatorConfig {
            hand_size: 14,
            ..SimulatorConfig::default()
        });
        assert!(matches!(
            simulator.preview_hands(),
            Err(GameError::InsufficientCards { requested: 56, .. })
        ));
    }
}
