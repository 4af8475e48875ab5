//! Countdown timer state machine.
//!
//! The timer is tick-driven: the embedder calls [`CountdownTimer::tick`]
//! once per 10 ms of wall time from its event loop. The engine never
//! spawns a thread, which keeps move processing and time updates
//! strictly interleaved: a tick and a move can never run at the same
//! time, so the board invariants hold without locking.
//!
//! Time is tracked as whole seconds plus a subsecond millisecond
//! counter. Each tick subtracts 10 ms; on underflow the second counter
//! drops by one and the subsecond counter resets to 990, staying just
//! under a full second to avoid exact-zero boundary jitter. The
//! countdown expires when both counters reach zero.

/// Milliseconds of simulated time per tick.
pub const TICK_MS: u32 = 10;

/// Subsecond counter value after a whole-second underflow.
const SUBSEC_RESET_MS: i32 = 990;

/// What one tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is not running; nothing happened.
    Idle,

    /// Time advanced; remaining whole seconds and subsecond ms.
    Running { secs: u32, subsec_ms: u32 },

    /// The countdown just hit zero. The timer has stopped itself.
    Expired,
}

/// An owned, cancelable countdown.
///
/// The running flag is the "timer handle": starting resets and arms
/// it, stopping clears it, and a tick on a stopped timer is a no-op.
/// The raw handle is never exposed.
#[derive(Clone, Debug)]
pub struct CountdownTimer {
    limit_secs: u32,
    secs: i32,
    subsec_ms: i32,
    running: bool,
}

impl CountdownTimer {
    /// Create an idle timer holding the full limit.
    #[must_use]
    pub fn new(limit_secs: u32) -> Self {
        assert!(limit_secs > 0, "Time limit must be non-zero");
        Self {
            limit_secs,
            secs: limit_secs as i32,
            subsec_ms: 0,
            running: false,
        }
    }

    /// Reset to the full limit and begin running.
    ///
    /// Cancels any countdown already in progress. Returns the initial
    /// reading, for the immediate time-update notification.
    pub fn start(&mut self) -> (u32, u32) {
        self.secs = self.limit_secs as i32;
        self.subsec_ms = 0;
        self.running = true;
        self.remaining()
    }

    /// Stop the countdown. Idempotent; safe to call when idle.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and restore the full limit, without starting.
    pub fn reset(&mut self) {
        self.running = false;
        self.secs = self.limit_secs as i32;
        self.subsec_ms = 0;
    }

    /// Whether the countdown is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time as (whole seconds, subsecond ms), floored at zero.
    #[must_use]
    pub fn remaining(&self) -> (u32, u32) {
        (self.secs.max(0) as u32, self.subsec_ms.max(0) as u32)
    }

    /// Remaining whole seconds.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.secs.max(0) as u32
    }

    /// Advance the countdown by one 10 ms tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.subsec_ms -= TICK_MS as i32;
        if self.subsec_ms < 0 {
            self.secs -= 1;
            self.subsec_ms = SUBSEC_RESET_MS;
        }

        if self.secs <= 0 && self.subsec_ms <= 0 {
            self.running = false;
            return TickOutcome::Expired;
        }

        let (secs, subsec_ms) = self.remaining();
        TickOutcome::Running { secs, subsec_ms }
    }
}
