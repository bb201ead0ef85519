//! Timestamp sources for tower cooldowns.

use std::time::Instant;

/// Supplies the millisecond timestamp handed to each tick.
pub trait Clock {
    /// Timestamp for the tick about to run. Must never decrease.
    fn now_ms(&self, tick: u64) -> u64;
}

/// Wall-clock milliseconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self, _tick: u64) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Synthetic time derived from the tick count, for reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct StepClock {
    tick_rate: u32,
}

impl StepClock {
    /// `tick_rate` must be non-zero.
    pub fn new(tick_rate: u32) -> Self {
        Self { tick_rate }
    }
}

impl Clock for StepClock {
    fn now_ms(&self, tick: u64) -> u64 {
        tick.saturating_mul(1000) / u64::from(self.tick_rate.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clock_one_second_per_tick_rate() {
        let clock = StepClock::new(60);
        assert_eq!(clock.now_ms(0), 0);
        assert_eq!(clock.now_ms(1), 16);
        assert_eq!(clock.now_ms(60), 1000);
        assert_eq!(clock.now_ms(90), 1500);
    }

    #[test]
    fn test_monotonic_clock_never_decreases() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms(0);
        let b = clock.now_ms(1);
        assert!(b >= a);
    }
}
