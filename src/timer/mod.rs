//! Tick-driven countdown timer.

pub mod countdown;

pub use countdown::{CountdownTimer, TickOutcome, TICK_MS};
