//! Tracked vehicle entity
//!
//! A vehicle is immutable once published: each simulation tick derives a new
//! value from the previous one rather than mutating in place.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::types::{GeoPosition, VehicleKind, VehicleStatus};

/// A fleet vehicle with live position and condition attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedVehicle {
    /// Stable unique identifier, e.g. "VH-0001"
    pub id: String,
    pub model: String,
    pub kind: VehicleKind,
    pub status: VehicleStatus,
    pub license_plate: String,
    pub position: GeoPosition,
    /// Last known street address (not updated by drift)
    pub address: String,
    /// Fuel level in percent (0-100)
    pub fuel: u8,
    /// Overall health score in percent (0-100)
    pub health: u8,
    /// Odometer reading in kilometers
    pub mileage: u32,
    pub driver_id: Option<String>,
    pub last_update: SystemTime,
}

impl TrackedVehicle {
    /// Produce the next-tick value of this vehicle: position shifted by the
    /// given deltas and the update timestamp refreshed. Identity, status and
    /// condition attributes are carried over unchanged.
    pub fn drifted(&self, dlat: f64, dlng: f64, now: SystemTime) -> TrackedVehicle {
        TrackedVehicle {
            position: self.position.offset(dlat, dlng),
            last_update: now,
            ..self.clone()
        }
    }
}
