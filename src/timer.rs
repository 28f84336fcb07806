use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Frame-driven repeating timer.
///
/// Elapsed time is fed in by the caller each frame. A frame longer than
/// several periods fires once, like a browser interval after a stall; the
/// backlog is dropped and only the partial period carries over.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
    paused: bool,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Starts the current period over.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Returns true when at least one period completed during `dt`.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.paused || self.period.is_zero() {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.period {
            return false;
        }

        // Keep the partial period only; period > remainder fits back in a Duration.
        let rest = self.elapsed.as_nanos() % self.period.as_nanos();
        self.elapsed = Duration::new(
            (rest / NANOS_PER_SEC) as u64,
            (rest % NANOS_PER_SEC) as u32,
        );
        true
    }
}
