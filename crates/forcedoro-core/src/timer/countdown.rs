//! Per-second countdown scheduling.

use std::time::Duration;

use tokio::time::{interval, Instant, Interval, MissedTickBehavior};

/// One-second tick source keyed to a monotonic clock.
///
/// `tick()` resolves roughly once per second with the number of whole
/// seconds elapsed since it last resolved, so a loop that was blocked (for
/// example, inside a confirmation prompt) catches up instead of drifting.
/// Cancellation is the caller's concern: racing `tick()` against a signal
/// future in `select!` observes a cancel request within a second instead of
/// waiting out the countdown.
pub struct Countdown {
    interval: Interval,
    last: Instant,
}

impl Countdown {
    pub fn new() -> Self {
        let mut interval = interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// Wait for the next whole-second boundary.
    ///
    /// Returns the number of whole seconds elapsed since the previous call,
    /// always at least 1. Sub-second remainders carry over to the next call.
    pub async fn tick(&mut self) -> u64 {
        loop {
            self.interval.tick().await;
            let elapsed = self.last.elapsed().as_secs();
            if elapsed >= 1 {
                self.last += Duration::from_secs(elapsed);
                return elapsed;
            }
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
