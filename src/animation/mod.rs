//! Renderer-facing animation intents.
//!
//! Purely descriptive: the engine emits these as a side effect of each
//! operation and the rendering layer replays them. They never feed
//! back into game state.

pub mod intent;

pub use intent::{AnimationIntent, AnimationLog};
