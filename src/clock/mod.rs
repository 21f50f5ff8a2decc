//! Elapsed-time tracking and display formatting.
//!
//! The clock records a start instant and recomputes elapsed time on demand,
//! so adapter polling need not be exact - a late tick still displays the
//! right value. Completion freezes the clock at its final reading for the
//! stats overlay.

use std::time::{Duration, Instant};

/// Suggested polling cadence for display updates. Fixed by design.
pub const TIMER_TICK: Duration = Duration::from_secs(1);

/// Format an elapsed duration as zero-padded MM:SS.
///
/// Minutes keep counting past 59 rather than wrapping.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Wall-clock timer for one game round.
///
/// Restarting a game creates a new clock; elapsed time never carries over.
#[derive(Clone, Debug)]
pub struct GameClock {
    started: Instant,
    frozen: Option<Duration>,
}

impl GameClock {
    /// Start a new clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            frozen: None,
        }
    }

    /// Elapsed time, or the frozen final reading once stopped.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.frozen.unwrap_or_else(|| self.started.elapsed())
    }

    /// Freeze the clock at its current reading. Idempotent.
    pub fn stop(&mut self) {
        if self.frozen.is_none() {
            self.frozen = Some(self.started.elapsed());
        }
    }

    /// Is the clock still running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frozen.is_none()
    }

    /// Current reading formatted as MM:SS.
    #[must_use]
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed())
    }
}
