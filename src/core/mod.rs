//! Core engine types: coordinates, directions, RNG, configuration.
//!
//! These are the building blocks the rest of the engine is assembled
//! from. Game shape (board size, tile set, time limit) lives in
//! `GameConfig` rather than in code.

pub mod cell;
pub mod config;
pub mod rng;

pub use cell::{Cell, Direction};
pub use config::GameConfig;
pub use rng::GameRng;
