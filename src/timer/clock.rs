//! Elapsed game time.
//!
//! The clock is observational only: it never gates flips or decides
//! outcomes. It counts whole seconds while running. However much time one
//! step covers, the controller reports only the latest second reached as a
//! `TimerTick` event.

use std::time::Duration;

/// Stopwatch for one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameTimer {
    elapsed: Duration,
    running: bool,
}

impl GameTimer {
    /// Create a stopped timer at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and return to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whole seconds elapsed.
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        u32::try_from(self.elapsed.as_secs()).unwrap_or(u32::MAX)
    }

    /// Let `delta` pass. Returns the new whole-second count when at least
    /// one second boundary was crossed, `None` while stopped or otherwise.
    ///
    /// Elapsed time saturates at `Duration::MAX`.
    pub fn advance(&mut self, delta: Duration) -> Option<u32> {
        if !self.running {
            return None;
        }
        let before = self.elapsed_secs();
        self.elapsed = self.elapsed.saturating_add(delta);
        let after = self.elapsed_secs();
        (after > before).then_some(after)
    }
}

/// Render seconds as `mm:ss`.
///
/// Minutes wrap at an hour, like a wall-clock minute hand.
///
/// ```
/// use memory_match::timer::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(75), "01:15");
/// assert_eq!(format_clock(3600 + 5), "00:05");
/// ```
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", (secs / 60) % 60, secs % 60)
}
