//! Fixed-period interval timer driven by elapsed time
//!
//! [`Interval`] does not sleep or schedule anything itself. The caller feeds
//! it elapsed time and it reports how many whole periods completed, carrying
//! the remainder into the next call. This keeps tick timing deterministic
//! under simulated time.

use std::time::Duration;

/// A repeating timer with a fixed period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    pending: Duration,
    fired: u64,
}

impl Interval {
    /// Create an interval that fires once every `period`.
    ///
    /// A zero period never fires.
    pub fn new(period: Duration) -> Self {
        Self { period, pending: Duration::ZERO, fired: 0 }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Total number of periods completed so far
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Time elapsed since the last completed period
    pub fn pending(&self) -> Duration {
        self.pending
    }

    /// Time remaining until the next period completes
    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.pending)
    }

    /// Feed `elapsed` time into the interval and return the periods completed
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if self.period.is_zero() {
            return 0;
        }

        let total = self.pending.as_nanos() + elapsed.as_nanos();
        let period = self.period.as_nanos();
        let ticks = u64::try_from(total / period).unwrap_or(u64::MAX);
        // Remainder is below the period, which itself fits in a Duration
        self.pending = Duration::from_nanos((total % period) as u64);
        self.fired = self.fired.saturating_add(ticks);
        ticks
    }
}
