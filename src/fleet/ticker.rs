//! Scheduling primitives for the tick loop
//!
//! The simulator never touches the wall clock directly: it is driven through
//! the [`Clock`] trait, so tests can substitute a manual clock and run any
//! number of ticks without real waits. Cancellation is a shared token checked
//! before every scheduled tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Time source and sleep facility for the drive loop
pub trait Clock {
    /// Current timestamp, stamped onto each published snapshot
    fn now(&self) -> SystemTime;

    /// Block (or pretend to) for the given duration
    fn sleep(&mut self, duration: Duration);
}

/// Real time: `SystemTime::now` and `thread::sleep`
#[derive(Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Test clock: `sleep` advances the reported time instantly
#[derive(Debug)]
pub struct ManualClock {
    now: SystemTime,
}

impl ManualClock {
    pub fn new(start: SystemTime) -> Self {
        Self { now: start }
    }

    /// Convenience constructor anchored at the unix epoch
    pub fn at_epoch() -> Self {
        Self::new(SystemTime::UNIX_EPOCH)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
    }
}

/// Shared cancellation flag for a running tick loop.
///
/// Clones observe the same flag, so a handle captured by a subscriber or
/// another thread can stop the loop before its next scheduled tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; takes effect before the next tick
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
