//! Wall-clock stopwatch on the monotonic clock.

use std::time::{Duration, Instant};

/// A running stopwatch. Create with [`Timer::start`]; read with
/// [`elapsed`](Timer::elapsed) or consume with [`stop`](Timer::stop).
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Instant,
}

impl Timer {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed nanoseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Stop and return elapsed seconds. Never negative.
    #[must_use]
    pub fn stop(self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic_and_non_negative() {
        let timer = Timer::start();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        let second = timer.elapsed();
        assert!(second >= first);
        assert!(second >= Duration::from_millis(2));
        assert!(timer.elapsed_nanos() >= 2_000_000);
        assert!(timer.stop() >= 0.002);
    }

    #[test]
    fn copies_share_the_start_instant() {
        let timer = Timer::start();
        let copy = timer;
        std::thread::sleep(Duration::from_millis(1));
        assert!(copy.stop() > 0.0);
        assert!(timer.stop() > 0.0);
    }
}
