//! Core types for the fleet simulation
//!
//! These are standalone types with no dependency on any view layer.

use serde::{Deserialize, Serialize};

/// A geographic coordinate (WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Offset by independent deltas on each axis
    pub fn offset(&self, dlat: f64, dlng: f64) -> GeoPosition {
        GeoPosition {
            lat: self.lat + dlat,
            lng: self.lng + dlng,
        }
    }
}

impl Default for GeoPosition {
    fn default() -> Self {
        Self { lat: 0.0, lng: 0.0 }
    }
}

/// A named location: coordinate plus a human-readable address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub position: GeoPosition,
    pub address: String,
}

impl Place {
    pub fn new(position: GeoPosition, address: impl Into<String>) -> Self {
        Self {
            position,
            address: address.into(),
        }
    }
}

/// Operational status of a fleet vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Available,
    Offline,
}

/// Body type of a fleet vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Sedan,
    Suv,
    Truck,
    Van,
    Bus,
}

/// Maximum positional drift per tick, per axis, in degrees
pub const DRIFT_BOUND_DEG: f64 = 0.0005;

/// Conversion between kilometers and degrees of latitude
pub const KM_PER_DEGREE: f64 = 111.0;

/// Default city center for seeded fleets (Hyderabad)
pub const DEFAULT_CENTER: GeoPosition = GeoPosition {
    lat: 17.385044,
    lng: 78.486671,
};

/// Default seeding radius around the city center in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 15.0;
