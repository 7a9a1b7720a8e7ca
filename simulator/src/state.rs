use cardtable_types::{CARDS_PER_DECK, DEFAULT_HAND_SIZE};
use serde::Serialize;

const DEFAULT_HTTP_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, Serialize)]
pub struct SimulatorConfig {
    /// Cards dealt to each player on start.
    pub hand_size: usize,
    /// Seeds the table shuffle when set.
    pub deterministic_seed: Option<u64>,
    pub http_body_limit_bytes: Option<usize>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            deterministic_seed: None,
            http_body_limit_bytes: Some(DEFAULT_HTTP_BODY_LIMIT_BYTES),
        }
    }
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.hand_size == 0 || self.hand_size > CARDS_PER_DECK {
            return Err(format!(
                "hand_size must be in 1..={CARDS_PER_DECK} (got {})",
                self.hand_size
            ));
        }
        Ok(())
    }

    /// Most players a single deal can serve.
    pub fn max_players(&self) -> usize {
        CARDS_PER_DECK / self.hand_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_players(), 4);
    }

    #[test]
    fn test_hand_size_bounds() {
        let zero = SimulatorConfig {
            hand_size: 0,
            ..SimulatorConfig::default()
        };
        assert!(zero.validate().unwrap_err().contains("hand_size"));

        let whole_deck = SimulatorConfig {
            hand_size: 52,
            ..SimulatorConfig::default()
        };
        assert!(whole_deck.validate().is_ok());
        assert_eq!(whole_deck.max_players(), 1);

        let too_big = SimulatorConfig {
            hand_size: 53,
            ..SimulatorConfig::default()
        };
        assert!(too_big.validate().is_err());
    }
}
