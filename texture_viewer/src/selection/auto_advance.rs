/// Timer driving auto mode

use std::time::{Duration, Instant};

/// Fires once per elapsed interval while enabled
///
/// Time is passed in by the caller so the timer can be driven by the frame
/// loop and by tests alike.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    enabled: bool,
    interval: Duration,
    last: Option<Instant>,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            enabled: false,
            interval,
            last: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Turn auto mode on or off; enabling restarts the timer at `now`
    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        if enabled && !self.enabled {
            self.last = Some(now);
        }
        self.enabled = enabled;
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Whether a step is due at `now`; a due step restarts the timer
    ///
    /// A step is due once strictly more than the interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        let last = *self.last.get_or_insert(now);
        if now.saturating_duration_since(last) > self.interval {
            self.last = Some(now);
            true
        } else {
            false
        }
    }
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[cfg(test)]
#[path = "auto_advance_tests.rs"]
mod tests;
