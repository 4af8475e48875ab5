//! Animation intent records.
//!
//! Each move appends descriptive records of what changed so the
//! rendering layer can replay it visually. The records carry no
//! authority over game state: the board is already in its final
//! position when they are read. The engine clears the log at the
//! start of every move, so the embedder must consume it before
//! issuing the next one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Cell;

/// One descriptive record of a state change, for visual replay only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationIntent {
    /// A tile generated in place (top-row refill).
    Spawn { cell: Cell, value: u32 },

    /// Two equal tiles combined into `to`; `value` is the merged value.
    Merge { from: Cell, to: Cell, value: u32 },

    /// The merged tile's transition, replayed after the merge record.
    Move { from: Cell, to: Cell, value: u32 },

    /// A tile falling one row during column refill.
    ///
    /// `from` is `None` for a freshly generated tile entering from
    /// above the board; otherwise the tile already existed at `from`.
    Drop {
        from: Option<Cell>,
        to: Cell,
        value: u32,
    },
}

impl AnimationIntent {
    /// True for records that introduce a tile that did not exist
    /// before the operation.
    #[must_use]
    pub fn is_new_tile(&self) -> bool {
        matches!(
            self,
            AnimationIntent::Spawn { .. } | AnimationIntent::Drop { from: None, .. }
        )
    }

    /// The tile value the record describes.
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            AnimationIntent::Spawn { value, .. }
            | AnimationIntent::Merge { value, .. }
            | AnimationIntent::Move { value, .. }
            | AnimationIntent::Drop { value, .. } => *value,
        }
    }
}

/// Ordered per-operation log.
///
/// One merge emits a merge/move pair plus at most `rows - 1` drops and
/// one new tile, so the inline capacity covers the 7-row board without
/// heap allocation.
pub type AnimationLog = SmallVec<[AnimationIntent; 8]>;
