//! Per-vehicle telemetry sampling

use std::time::SystemTime;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::types::GeoPosition;
use super::vehicle::TrackedVehicle;

/// One telemetry reading for a single vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub vehicle_id: String,
    pub timestamp: SystemTime,
    pub position: GeoPosition,
    /// Momentary speed in km/h
    pub speed_kmh: u32,
    pub fuel: u8,
    pub engine_health: u8,
    pub brake_health: u8,
    pub tire_health: u8,
}

/// Generates telemetry samples from vehicle state, with randomized subsystem
/// readings the way a real sensor feed would jitter
pub struct TelemetryProbe {
    rng: Option<StdRng>,
}

impl Default for TelemetryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryProbe {
    pub fn new() -> Self {
        Self { rng: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    fn random_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Read one sample off a vehicle
    pub fn sample(&mut self, vehicle: &TrackedVehicle, now: SystemTime) -> TelemetrySample {
        TelemetrySample {
            vehicle_id: vehicle.id.clone(),
            timestamp: now,
            position: vehicle.position,
            speed_kmh: 20 + self.random_range(0..60),
            fuel: vehicle.fuel,
            engine_health: 80 + self.random_range(0..20) as u8,
            brake_health: 75 + self.random_range(0..25) as u8,
            tire_health: 85 + self.random_range(0..15) as u8,
        }
    }

    /// Sample at most `limit` vehicles from the front of the snapshot
    pub fn sample_fleet(
        &mut self,
        snapshot: &[TrackedVehicle],
        limit: usize,
        now: SystemTime,
    ) -> Vec<TelemetrySample> {
        snapshot
            .iter()
            .take(limit)
            .map(|vehicle| self.sample(vehicle, now))
            .collect()
    }
}
