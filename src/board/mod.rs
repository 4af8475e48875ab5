//! Board grid and tile generation.
//!
//! [`Board`] owns the cell values and answers adjacency queries;
//! [`SpawnTable`] produces new tiles under the configured weight
//! distribution. Both are driven by the engine, which is responsible
//! for keeping the board fully populated across operations.

pub mod grid;
pub mod spawn;

pub use grid::Board;
pub use spawn::SpawnTable;
