//! # merge-blitz
//!
//! A timed single-tile merge puzzle engine: a 7×5 board that is always
//! fully populated with tiles, a 30-second countdown, and merges made
//! by nudging one anchor tile at one equal neighbor.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns State**: board, score, countdown, and animation
//!    log live inside [`GameEngine`]. The UI layer reads snapshots and
//!    calls operations; it never mutates engine state.
//!
//! 2. **Single-Tile Moves**: a move checks exactly one neighbor of one
//!    anchor cell. There is no whole-row or whole-column collapse.
//!
//! 3. **Always Populated**: a merge empties one cell and the
//!    column-local refill fills it before the operation returns, so
//!    the terminal condition is "no adjacent equal pair", never "no
//!    empty cell".
//!
//! 4. **Tick-Driven Time**: the host event loop calls
//!    [`GameEngine::tick`] every 10 ms. Ticks and moves interleave
//!    cooperatively; nothing preempts, so no locking is needed.
//!
//! 5. **Configuration Over Convention**: board size, tile set, refill
//!    weights, time limit, and target value come from [`GameConfig`].
//!
//! ## Modules
//!
//! - `core`: coordinates, directions, RNG, configuration
//! - `board`: grid storage and weighted tile generation
//! - `animation`: renderer-facing intent records
//! - `timer`: countdown state machine
//! - `engine`: the public game engine and snapshot

pub mod animation;
pub mod board;
pub mod core;
pub mod engine;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{Cell, Direction, GameConfig, GameRng};

pub use crate::board::{Board, SpawnTable};

pub use crate::animation::{AnimationIntent, AnimationLog};

pub use crate::timer::{CountdownTimer, TickOutcome, TICK_MS};

pub use crate::engine::{FailureReason, GameEngine, GameSnapshot};
