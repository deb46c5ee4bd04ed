//! Live fleet state simulation
//!
//! The simulator owns the canonical vehicle snapshot. On every tick it
//! replaces the snapshot with a freshly built one — each vehicle shifted by a
//! small uniform positional drift — and hands the new snapshot to every
//! subscriber, synchronously, in registration order. Readers therefore always
//! see a complete snapshot, never a partial update.

use std::ops::RangeInclusive;
use std::time::{Duration, SystemTime};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ticker::{CancelToken, Clock};
use super::types::DRIFT_BOUND_DEG;
use super::vehicle::TrackedVehicle;

/// Handle returned by [`LiveSimulator::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

type SnapshotCallback = Box<dyn FnMut(&[TrackedVehicle])>;

/// Timer-driven simulator that perturbs a fleet and republishes snapshots
pub struct LiveSimulator {
    snapshot: Vec<TrackedVehicle>,
    subscribers: Vec<(SubscriberId, SnapshotCallback)>,
    next_subscriber: usize,
    interval: Duration,
    drift_bound: f64,
    running: bool,
    cancel: CancelToken,
    /// Optional seeded RNG for reproducible drift
    rng: Option<StdRng>,
    ticks: u64,
}

impl Default for LiveSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveSimulator {
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new(),
            subscribers: Vec::new(),
            next_subscriber: 0,
            interval: Duration::from_secs(5),
            drift_bound: DRIFT_BOUND_DEG,
            running: false,
            cancel: CancelToken::new(),
            rng: None,
            ticks: 0,
        }
    }

    /// Create a simulator with a seeded RNG for reproducible drift
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
            ..Self::new()
        }
    }

    /// Override the per-axis drift bound in degrees
    pub fn with_drift_bound(mut self, bound: f64) -> Self {
        self.drift_bound = bound;
        self
    }

    /// Get a random value in the given range, using the seeded RNG if available
    fn random_range(&mut self, range: RangeInclusive<f64>) -> f64 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Register a listener invoked with the latest snapshot on every tick.
    /// Listeners run synchronously, in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&[TrackedVehicle]) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a listener. Returns false if the id was already unsubscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Arm the simulator with a seed fleet and a publish interval.
    /// A second call while running is silently ignored, so a double start can
    /// never produce duplicate timers or re-seed the snapshot.
    pub fn start(&mut self, interval: Duration, seed: Vec<TrackedVehicle>) {
        if self.running {
            debug!("start ignored: simulator already running");
            return;
        }
        self.snapshot = seed;
        self.interval = interval;
        // Keep handles issued before start valid; only a restart after a stop
        // needs a fresh flag
        if self.cancel.is_cancelled() {
            self.cancel = CancelToken::new();
        }
        self.running = true;
    }

    /// Cancel the drive loop. Takes effect before the next scheduled tick; a
    /// tick already in flight completes. Safe to call when not started.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// A handle onto the current run's cancellation flag. A subscriber or
    /// another thread can use it to stop the loop.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The latest published snapshot
    pub fn snapshot(&self) -> &[TrackedVehicle] {
        &self.snapshot
    }

    /// Total ticks executed since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One tick: build the next snapshot and publish it.
    ///
    /// Every vehicle's latitude and longitude each move by an independent
    /// uniform delta within the drift bound; id, status and condition fields
    /// are unchanged and order is preserved. The previous snapshot is
    /// discarded, never aliased.
    pub fn tick(&mut self, now: SystemTime) {
        let bound = self.drift_bound;
        let prev = std::mem::take(&mut self.snapshot);
        let mut next = Vec::with_capacity(prev.len());
        for vehicle in &prev {
            let dlat = self.random_range(-bound..=bound);
            let dlng = self.random_range(-bound..=bound);
            next.push(vehicle.drifted(dlat, dlng, now));
        }
        self.snapshot = next;
        self.ticks += 1;
        debug!(
            "tick {}: published snapshot of {} vehicles",
            self.ticks,
            self.snapshot.len()
        );

        let snapshot = &self.snapshot;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(snapshot);
        }
    }

    /// Drive the tick loop until stopped or cancelled
    pub fn run(&mut self, clock: &mut dyn Clock) {
        while self.running && !self.cancel.is_cancelled() {
            self.tick(clock.now());
            // A cancel raised during the tick takes effect now, not after
            // another full interval
            if self.cancel.is_cancelled() {
                break;
            }
            clock.sleep(self.interval);
        }
        self.running = false;
    }

    /// Drive at most `max_ticks` scheduled ticks; returns how many ran.
    /// Stops early if the simulator is stopped or the token is cancelled.
    pub fn run_ticks(&mut self, clock: &mut dyn Clock, max_ticks: u64) -> u64 {
        let mut executed = 0;
        while executed < max_ticks && self.running && !self.cancel.is_cancelled() {
            self.tick(clock.now());
            executed += 1;
            if self.cancel.is_cancelled() {
                break;
            }
            clock.sleep(self.interval);
        }
        if self.cancel.is_cancelled() {
            self.running = false;
        }
        executed
    }
}
