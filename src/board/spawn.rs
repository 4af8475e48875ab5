//! Weighted tile generation for refills.
//!
//! Every refill draw comes from the base value set under a fixed
//! weight table; low values dominate so merges stay reachable late in
//! a run. The shipped table is `{2: 0.5, 4: 0.3, 8: 0.1, 16: 0.05,
//! 32: 0.05}`.

use crate::core::{GameConfig, GameRng};

/// Parallel value/weight tables backing the refill draw.
#[derive(Clone, Debug)]
pub struct SpawnTable {
    values: Vec<u32>,
    weights: Vec<f64>,
}

impl SpawnTable {
    /// Create a spawn table from parallel value and weight slices.
    ///
    /// ## Panics
    ///
    /// If the tables are empty, differ in length, hold negative
    /// weights, or sum to zero weight.
    #[must_use]
    pub fn new(values: &[u32], weights: &[f64]) -> Self {
        assert!(!values.is_empty(), "Spawn table must not be empty");
        assert_eq!(values.len(), weights.len(), "Weights must parallel values");
        assert!(weights.iter().all(|&w| w >= 0.0), "Weights must be non-negative");
        assert!(weights.iter().sum::<f64>() > 0.0, "Weights must have a positive sum");

        Self {
            values: values.to_vec(),
            weights: weights.to_vec(),
        }
    }

    /// Build the table from a validated configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(&config.base_values, &config.spawn_weights)
    }

    /// Draw one tile value.
    ///
    /// `choose_weighted` already falls back to the last tier when
    /// floating rounding leaves no threshold hit, so a draw always
    /// yields a value.
    pub fn draw(&self, rng: &mut GameRng) -> u32 {
        let index = rng
            .choose_weighted(&self.weights)
            .expect("spawn table validated non-empty with positive weight sum");
        self.values[index]
    }

    /// The values this table can produce.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}
