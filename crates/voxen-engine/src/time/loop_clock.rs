use std::thread::sleep;
use std::time::{Duration, Instant};

/// Paces event-loop cycles and counts ticks.
///
/// One clock per loop so concurrent loops never share pacing state. The
/// interval is the floor between consecutive ticks; a cycle that already
/// took longer is not penalized further. `Duration::ZERO` disables
/// sleeping entirely (tests, headless batch runs).
#[derive(Debug, Clone)]
pub struct LoopClock {
    interval: Duration,
    last: Instant,
    ticks: u64,
}

impl LoopClock {
    /// Default interval matches the classic 10 Hz dispatch cadence.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
            ticks: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Resets the pacing baseline without touching the tick counter.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Sleeps out the remainder of the current interval, then advances and
    /// returns the tick counter.
    pub fn tick(&mut self) -> u64 {
        if !self.interval.is_zero() {
            let elapsed = self.last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed);
            }
        }
        self.last = Instant::now();

        let tick = self.ticks;
        self.ticks = self.ticks.wrapping_add(1);
        tick
    }
}

impl Default for LoopClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
