//! Single-slot periodic tick source.
//!
//! The ticker holds at most one schedule. Arming replaces whatever was
//! scheduled before, so two countdowns can never run side by side.

use std::time::{Duration, Instant};

use tracing::trace;

/// Default tick period: one second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A periodic tick schedule owned by a session machine.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Create a released ticker with the given period.
    ///
    /// A zero period is treated as one millisecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: None,
        }
    }

    /// Tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Arm the ticker so the first tick falls one period after `now`.
    ///
    /// Any previous schedule is dropped.
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.period);
        trace!(period_ms = self.period.as_millis(), "ticker armed");
    }

    /// Release the schedule. No further ticks are reported until re-armed.
    pub fn release(&mut self) {
        if self.next.take().is_some() {
            trace!("ticker released");
        }
    }

    /// Whether a schedule is active.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Instant of the next tick, if armed.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Count the ticks that fell due up to `now` and advance the schedule
    /// past them.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        if now < next {
            return 0;
        }

        let behind = now.duration_since(next).as_nanos() / self.period.as_nanos();
        let count = u32::try_from(behind.saturating_add(1)).unwrap_or(u32::MAX);
        self.next = Some(next + self.period * count);
        count
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_ticker_never_fires() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.due(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_due_counts_whole_periods() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);

        assert_eq!(ticker.due(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(1000)), 1);
        // Same instant again: already reported
        assert_eq!(ticker.due(start + Duration::from_millis(1000)), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(3500)), 2);
        assert_eq!(ticker.due(start + Duration::from_millis(4000)), 1);
    }

    #[test]
    fn test_rearm_replaces_schedule() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);
        ticker.arm(start + Duration::from_millis(500));

        assert_eq!(ticker.due(start + Duration::from_millis(1000)), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(1500)), 1);
    }

    #[test]
    fn test_release() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);
        ticker.release();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.due(start + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.period(), Duration::from_millis(1));
    }
}
