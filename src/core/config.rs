//! Engine configuration.
//!
//! Board dimensions, the base tile set, refill weights, the countdown
//! limit, and the winning value are supplied at engine construction
//! rather than hardcoded. [`GameConfig::default`] is the shipped game:
//! a 7×5 board, base tiles `{2, 4, 8, 16, 32}`, a 30-second limit, and
//! 2048 as the winning (and capping) value.

use serde::{Deserialize, Serialize};

/// Configuration for one game engine instance.
///
/// Preconditions are checked by [`GameConfig::validate`], which the
/// engine calls at construction. Invalid configurations are a caller
/// contract violation, not a runtime error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board height in cells.
    pub rows: usize,

    /// Board width in cells.
    pub cols: usize,

    /// Tile values used for the initial fill and for refills.
    pub base_values: Vec<u32>,

    /// Refill weight per base value; parallel to `base_values`.
    /// Weights need not sum to 1.
    pub spawn_weights: Vec<f64>,

    /// Countdown length in whole seconds.
    pub time_limit_secs: u32,

    /// Merged values are capped here; reaching it wins the challenge.
    pub target_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 5,
            base_values: vec![2, 4, 8, 16, 32],
            spawn_weights: vec![0.5, 0.3, 0.1, 0.05, 0.05],
            time_limit_secs: 30,
            target_value: 2048,
        }
    }
}

impl GameConfig {
    /// Assert the structural preconditions of this configuration.
    ///
    /// ## Panics
    ///
    /// - Zero rows or columns
    /// - Empty base value set, or a zero base value
    /// - Weight table length differing from the value table
    /// - Negative weights, or weights that sum to zero
    /// - Zero time limit or target value
    pub fn validate(&self) {
        assert!(self.rows > 0, "Board must have at least one row");
        assert!(self.cols > 0, "Board must have at least one column");
        assert!(!self.base_values.is_empty(), "Base value set must not be empty");
        assert!(
            self.base_values.iter().all(|&v| v > 0),
            "Base values must be non-zero"
        );
        assert_eq!(
            self.spawn_weights.len(),
            self.base_values.len(),
            "Spawn weights must parallel base values"
        );
        assert!(
            self.spawn_weights.iter().all(|&w| w >= 0.0),
            "Spawn weights must be non-negative"
        );
        assert!(
            self.spawn_weights.iter().sum::<f64>() > 0.0,
            "Spawn weights must have a positive sum"
        );
        assert!(self.time_limit_secs > 0, "Time limit must be non-zero");
        assert!(self.target_value > 0, "Target value must be non-zero");
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        config.validate();

        assert_eq!(config.rows, 7);
        assert_eq!(config.cols, 5);
        assert_eq!(config.cell_count(), 35);
        assert_eq!(config.base_values, vec![2, 4, 8, 16, 32]);
        assert_eq!(config.time_limit_secs, 30);
        assert_eq!(config.target_value, 2048);
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn test_zero_rows_rejected() {
        let config = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        config.validate();
    }

    #[test]
    #[should_panic(expected = "parallel base values")]
    fn test_mismatched_weights_rejected() {
        let config = GameConfig {
            spawn_weights: vec![1.0],
            ..GameConfig::default()
        };
        config.validate();
    }

    #[test]
    #[should_panic(expected = "positive sum")]
    fn test_all_zero_weights_rejected() {
        let config = GameConfig {
            spawn_weights: vec![0.0; 5],
            ..GameConfig::default()
        };
        config.validate();
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
