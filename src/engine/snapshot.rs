//! Read-only state snapshot for the rendering layer.

use serde::{Deserialize, Serialize};

use crate::animation::AnimationIntent;

/// Observable engine state at one point in time.
///
/// The rendering layer reads snapshots and replays `animations`; it
/// never mutates engine state directly. `board` is row-major with row
/// 0 at the top and is always fully populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Tile values, `board[row][col]`.
    pub board: Vec<Vec<u32>>,

    /// Current score (high-water mark of merged values).
    pub score: u32,

    /// Running maximum of `score`; survives resets.
    pub best_score: u32,

    /// Terminal flag (timeout or no legal merge left).
    pub is_game_over: bool,

    /// Whether the target value has been reached this game.
    pub is_won: bool,

    /// Board height.
    pub rows: usize,

    /// Board width.
    pub cols: usize,

    /// Animation intents from the most recent operation.
    pub animations: Vec<AnimationIntent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = GameSnapshot {
            board: vec![vec![2, 4], vec![8, 16]],
            score: 16,
            best_score: 32,
            is_game_over: false,
            is_won: false,
            rows: 2,
            cols: 2,
            animations: vec![AnimationIntent::Spawn {
                cell: Cell::new(0, 0),
                value: 2,
            }],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
    }
}
