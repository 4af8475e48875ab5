//! The board engine: grid, score, countdown, and the animation log.
//!
//! [`GameEngine`] exclusively owns all game state. Collaborators read
//! snapshots via [`GameEngine::game_state`] and call the documented
//! operations; the only outbound dependency is the synchronous
//! invocation of registered callbacks at the moment a transition
//! happens.
//!
//! ## Invariant
//!
//! Every public operation returns with the board fully populated.
//! A merge empties exactly one cell and the refill step restores it
//! before `attempt_move` returns, so observers never see a hole.
//!
//! ## Host loop contract
//!
//! The embedder drives time by calling [`GameEngine::tick`] every
//! 10 ms while a challenge runs. Ticks and move attempts interleave on
//! the host event loop and never preempt each other; whichever of the
//! win and timeout paths commits first wins the race, and the
//! completion callback fires at most once per game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::animation::{AnimationIntent, AnimationLog};
use crate::board::{Board, SpawnTable};
use crate::core::{Cell, Direction, GameConfig, GameRng};
use crate::timer::{CountdownTimer, TickOutcome};

use super::snapshot::GameSnapshot;

/// Why a challenge ended unsuccessfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    /// The countdown reached zero first.
    Timeout,
    /// No adjacent equal pair was left on the board.
    NoMoves,
}

type TimeUpdateCallback = Box<dyn FnMut(u32, u32)>;
type CompletionCallback = Box<dyn FnMut(bool, Option<FailureReason>)>;

/// The game-state engine.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    spawn: SpawnTable,
    rng: GameRng,

    score: u32,
    best_score: u32,
    won: bool,
    is_game_over: bool,
    /// Completion latch: set by whichever of the win/timeout/no-moves
    /// paths commits first; later paths become no-ops.
    completed: bool,

    animations: AnimationLog,
    timer: CountdownTimer,

    time_update_cb: Option<TimeUpdateCallback>,
    completion_cb: Option<CompletionCallback>,
}

impl GameEngine {
    /// Create an engine with the default 7×5 timed challenge.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create an engine with an explicit configuration.
    ///
    /// ## Panics
    ///
    /// If the configuration fails [`GameConfig::validate`].
    #[must_use]
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        config.validate();
        let spawn = SpawnTable::from_config(&config);
        let board = Board::new(config.rows, config.cols);
        let timer = CountdownTimer::new(config.time_limit_secs);

        let mut engine = Self {
            board,
            spawn,
            rng: GameRng::new(seed),
            score: 0,
            best_score: 0,
            won: false,
            is_game_over: false,
            completed: false,
            animations: AnimationLog::new(),
            timer,
            time_update_cb: None,
            completion_cb: None,
            config,
        };
        engine.init_board();
        engine
    }

    /// Create an entropy-seeded engine, for interactive play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy().seed())
    }

    /// Create an engine over an explicit board layout.
    ///
    /// Intended for embedders restoring a position and for tests.
    /// Score, flags, and the countdown start fresh.
    ///
    /// ## Panics
    ///
    /// If the board dimensions disagree with the configuration.
    #[must_use]
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Self {
        assert_eq!(board.rows(), config.rows, "Board height must match config");
        assert_eq!(board.cols(), config.cols, "Board width must match config");

        let mut engine = Self::with_config(config, seed);
        engine.board = board;
        engine
    }

    // === Initialization ===

    /// (Re)fill the board and reset per-game state.
    ///
    /// Every cell gets an independent uniform draw from the base value
    /// set; adjacent equals are allowed, so a fresh board usually has
    /// immediate merges. Score, the terminal flags, the completion
    /// latch, and the animation log are cleared and the remaining time
    /// returns to the limit. The best score is NOT reset.
    pub fn init_board(&mut self) {
        self.board.fill_random(&self.config.base_values, &mut self.rng);
        self.score = 0;
        self.won = false;
        self.is_game_over = false;
        self.completed = false;
        self.animations.clear();
        self.timer.reset();
    }

    /// Reset for a "play again" round: stop the countdown and
    /// reinitialize the board.
    ///
    /// The caller re-arms the challenge with [`GameEngine::start_timer`]
    /// afterwards.
    pub fn reset_game(&mut self) {
        self.timer.stop();
        self.init_board();
        self.refresh_best_score();
    }

    // === Moves ===

    /// Attempt to merge the tile at `anchor` into its one neighbor in
    /// `direction`.
    ///
    /// The check covers exactly that neighbor, never a whole row or
    /// column. On a match the neighbor takes the doubled (capped)
    /// value, the anchor empties, and the column refill restores full
    /// population before this returns. On any mismatch (different
    /// value, or no neighbor in that direction) nothing changes and
    /// the cleared animation log stays empty.
    ///
    /// Returns whether a merge happened.
    ///
    /// ## Panics
    ///
    /// If `anchor` is out of bounds; validated cells are the caller's
    /// contract.
    pub fn attempt_move(&mut self, anchor: Cell, direction: Direction) -> bool {
        assert!(self.board.contains(anchor), "Anchor {anchor} out of bounds");
        self.animations.clear();

        let Some(neighbor) =
            anchor.neighbor(direction, self.board.rows(), self.board.cols())
        else {
            return false;
        };

        let value = self.board.get(anchor);
        if self.board.get(neighbor) != value {
            return false;
        }

        let merged = (value * 2).min(self.config.target_value);
        self.board.set(neighbor, merged);
        self.board.clear(anchor);
        self.set_score(merged);
        if merged == self.config.target_value && !self.won {
            self.won = true;
        }

        self.animations.push(AnimationIntent::Merge {
            from: anchor,
            to: neighbor,
            value: merged,
        });
        self.animations.push(AnimationIntent::Move {
            from: anchor,
            to: neighbor,
            value: merged,
        });

        self.fill_from_top(anchor);
        self.refresh_best_score();
        true
    }

    /// Restore full population after a merge emptied `empty`.
    ///
    /// Top-row hole: generate one tile in place. Otherwise: every cell
    /// above the hole in that column shifts down one row and a fresh
    /// tile drops into the vacated top cell. Gravity is local to the
    /// one column; the rest of the board never re-settles.
    fn fill_from_top(&mut self, empty: Cell) {
        let col = empty.col;

        if empty.row == 0 {
            let value = self.spawn.draw(&mut self.rng);
            self.board.set(empty, value);
            self.animations.push(AnimationIntent::Spawn { cell: empty, value });
            return;
        }

        // Values strictly above the hole, top to bottom. Snapshotted
        // first so the in-place shift can't read an overwritten cell.
        let falling: SmallVec<[u32; 8]> = (0..empty.row)
            .map(|row| self.board.get(Cell::new(row, col)))
            .collect();

        for (row, &value) in falling.iter().enumerate() {
            let from = Cell::new(row, col);
            let to = Cell::new(row + 1, col);
            self.board.set(to, value);
            self.animations.push(AnimationIntent::Drop {
                from: Some(from),
                to,
                value,
            });
        }

        let top = Cell::new(0, col);
        let value = self.spawn.draw(&mut self.rng);
        self.board.set(top, value);
        self.animations.push(AnimationIntent::Drop {
            from: None,
            to: top,
            value,
        });
    }

    // === Scoring ===

    /// High-water-mark score update: the merged value replaces the
    /// score only when it exceeds it. Reaching the target value records
    /// the win, stops the countdown, and fires completion; the board
    /// does not lock, so play can continue.
    fn set_score(&mut self, merged: u32) {
        if merged > self.score {
            self.score = merged;
        }
        if merged == self.config.target_value {
            self.won = true;
            self.timer.stop();
            self.complete(true, None);
        }
    }

    fn refresh_best_score(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
        }
    }

    // === Terminal detection ===

    /// Check whether any legal merge remains.
    ///
    /// The board is always fully populated, so the only terminal
    /// condition is a board with no adjacent equal pair. When terminal
    /// with time still on the clock, this stops the countdown and
    /// reports the distinct `NoMoves` failure (a terminal board found
    /// after expiry already completed as `Timeout`).
    pub fn check_game_over(&mut self) -> bool {
        if self.board.has_adjacent_pair() {
            return false;
        }

        self.is_game_over = true;
        if self.timer.remaining_secs() > 0 {
            self.timer.stop();
            self.complete(false, Some(FailureReason::NoMoves));
        }
        true
    }

    // === Countdown ===

    /// Reset the countdown to the full limit and start it, canceling
    /// any countdown already in progress. Emits one immediate time
    /// update.
    ///
    /// Call only after a state reset (`init_board`/`reset_game`).
    pub fn start_timer(&mut self) {
        let (secs, subsec_ms) = self.timer.start();
        self.emit_time_update(secs, subsec_ms);
    }

    /// Stop the countdown. Idempotent.
    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    /// Advance the countdown by one 10 ms tick.
    ///
    /// The host event loop calls this while a challenge runs. Each
    /// running tick emits a time update; the expiring tick emits the
    /// final zero reading, marks the game over, and fires completion
    /// with [`FailureReason::Timeout`], unless a win already latched
    /// completion first.
    pub fn tick(&mut self) {
        match self.timer.tick() {
            TickOutcome::Idle => {}
            TickOutcome::Running { secs, subsec_ms } => {
                self.emit_time_update(secs, subsec_ms);
            }
            TickOutcome::Expired => {
                self.emit_time_update(0, 0);
                self.is_game_over = true;
                self.complete(false, Some(FailureReason::Timeout));
            }
        }
    }

    /// Remaining time as (whole seconds, subsecond ms).
    #[must_use]
    pub fn remaining_time(&self) -> (u32, u32) {
        self.timer.remaining()
    }

    /// Whether the countdown is currently running.
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    // === Callbacks ===

    /// Register the time-update callback: `(remaining whole seconds,
    /// remaining subsecond ms)`, invoked synchronously on start and on
    /// every running tick.
    pub fn set_time_update_callback(&mut self, callback: impl FnMut(u32, u32) + 'static) {
        self.time_update_cb = Some(Box::new(callback));
    }

    /// Register the completion callback: `(success, reason)`, invoked
    /// synchronously at most once per game. `reason` is `None` on
    /// success.
    pub fn set_completion_callback(
        &mut self,
        callback: impl FnMut(bool, Option<FailureReason>) + 'static,
    ) {
        self.completion_cb = Some(Box::new(callback));
    }

    fn emit_time_update(&mut self, secs: u32, subsec_ms: u32) {
        if let Some(cb) = self.time_update_cb.as_mut() {
            cb(secs, subsec_ms);
        }
    }

    /// Fire the completion callback at most once per game. All three
    /// ending paths funnel through here; whichever commits first
    /// suppresses the others.
    fn complete(&mut self, success: bool, reason: Option<FailureReason>) {
        if self.completed {
            return;
        }
        self.completed = true;
        if let Some(cb) = self.completion_cb.as_mut() {
            cb(success, reason);
        }
    }

    // === Observation ===

    /// Read-only snapshot of the observable state, including the
    /// animation log of the most recent operation.
    #[must_use]
    pub fn game_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_rows(),
            score: self.score,
            best_score: self.best_score,
            is_game_over: self.is_game_over,
            is_won: self.won,
            rows: self.board.rows(),
            cols: self.board.cols(),
            animations: self.animations.to_vec(),
        }
    }

    /// The board grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Running maximum of the score across resets.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Whether the target value has been reached this game.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Whether the game has ended (timeout or no legal merge).
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Animation intents from the most recent operation.
    #[must_use]
    pub fn animations(&self) -> &[AnimationIntent] {
        &self.animations
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_board(value: u32) -> Board {
        Board::from_rows(&vec![vec![value; 5]; 7])
    }

    #[test]
    fn test_new_engine_is_fully_populated() {
        let engine = GameEngine::new(42);

        assert!(engine.board().is_fully_populated());
        assert_eq!(engine.score(), 0);
        assert!(!engine.is_won());
        assert!(!engine.is_game_over());
        assert!(engine.animations().is_empty());
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = GameEngine::new(7);
        let b = GameEngine::new(7);

        assert_eq!(a.game_state().board, b.game_state().board);
    }

    #[test]
    fn test_merge_into_right_neighbor() {
        let mut engine = GameEngine::with_board(GameConfig::default(), uniform_board(4), 42);

        let moved = engine.attempt_move(Cell::new(3, 1), Direction::Right);

        assert!(moved);
        assert_eq!(engine.board().get(Cell::new(3, 2)), 8);
        assert!(engine.board().is_fully_populated());
        assert_eq!(engine.score(), 8);
    }

    #[test]
    fn test_no_op_against_board_edge() {
        let mut engine = GameEngine::with_board(GameConfig::default(), uniform_board(4), 42);
        let before = engine.game_state();

        let moved = engine.attempt_move(Cell::new(0, 0), Direction::Up);

        assert!(!moved);
        let after = engine.game_state();
        assert_eq!(before.board, after.board);
        assert_eq!(before.score, after.score);
        assert!(after.animations.is_empty());
    }

    #[test]
    fn test_merge_emits_merge_then_move() {
        let mut engine = GameEngine::with_board(GameConfig::default(), uniform_board(2), 42);

        engine.attempt_move(Cell::new(0, 2), Direction::Left);

        let anchor = Cell::new(0, 2);
        let target = Cell::new(0, 1);
        assert_eq!(
            engine.animations()[0],
            AnimationIntent::Merge {
                from: anchor,
                to: target,
                value: 4
            }
        );
        assert_eq!(
            engine.animations()[1],
            AnimationIntent::Move {
                from: anchor,
                to: target,
                value: 4
            }
        );
    }

    #[test]
    fn test_completion_latch_fires_once() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);

        let mut engine = GameEngine::with_board(GameConfig::default(), uniform_board(1024), 42);
        engine.set_completion_callback(move |success, reason| {
            sink.borrow_mut().push((success, reason));
        });

        engine.start_timer();
        engine.attempt_move(Cell::new(0, 0), Direction::Right); // 2048: win
        engine.attempt_move(Cell::new(5, 0), Direction::Right); // another 2048

        // Timer already stopped; ticking must not add a timeout report.
        for _ in 0..5000 {
            engine.tick();
        }

        assert_eq!(calls.borrow().as_slice(), &[(true, None)]);
        assert!(engine.is_won());
        assert!(!engine.is_timer_running());
    }
}
