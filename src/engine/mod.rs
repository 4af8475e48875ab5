//! The public game engine.
//!
//! ## Key Components
//!
//! - [`GameEngine`]: owns board, score, countdown, and the animation
//!   log; exposes the move/refill/terminal/timer operations
//! - [`GameSnapshot`]: the read-only state view collaborators consume
//! - [`FailureReason`]: the two unsuccessful endings, delivered through
//!   the completion callback rather than thrown
//!
//! ## Example
//!
//! ```
//! use merge_blitz::engine::GameEngine;
//! use merge_blitz::core::{Cell, Direction};
//!
//! let mut engine = GameEngine::new(42);
//! engine.start_timer();
//!
//! // The UI identifies an anchor tile from the drag gesture and asks
//! // for a single-neighbor merge.
//! let moved = engine.attempt_move(Cell::new(3, 2), Direction::Left);
//!
//! // The renderer replays what changed, then the board is current.
//! let snapshot = engine.game_state();
//! assert_eq!(snapshot.board.len(), 7);
//! if moved {
//!     assert!(!snapshot.animations.is_empty());
//! }
//! ```

pub mod game;
pub mod snapshot;

pub use game::{FailureReason, GameEngine};
pub use snapshot::GameSnapshot;
