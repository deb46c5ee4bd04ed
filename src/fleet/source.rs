//! Remote fleet data boundary
//!
//! The simulator consumes entity collections from an external service it does
//! not control. A fetch failure is never fatal: the caller substitutes a
//! locally seeded fleet so the view layer always has something renderable.

use std::time::SystemTime;

use anyhow::{bail, Result};
use log::{info, warn};

use super::alerts::EmergencyAlert;
use super::bookings::Booking;
use super::seed::FleetSeeder;
use super::vehicle::TrackedVehicle;

/// Boundary contract for a remote fleet data service
pub trait FleetDataSource {
    fn fetch_vehicles(&mut self) -> Result<Vec<TrackedVehicle>>;
    fn fetch_bookings(&mut self) -> Result<Vec<Booking>>;
    fn fetch_alerts(&mut self) -> Result<Vec<EmergencyAlert>>;
}

/// A source serving canned collections; stands in for a reachable backend
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub vehicles: Vec<TrackedVehicle>,
    pub bookings: Vec<Booking>,
    pub alerts: Vec<EmergencyAlert>,
}

impl FleetDataSource for StaticSource {
    fn fetch_vehicles(&mut self) -> Result<Vec<TrackedVehicle>> {
        Ok(self.vehicles.clone())
    }

    fn fetch_bookings(&mut self) -> Result<Vec<Booking>> {
        Ok(self.bookings.clone())
    }

    fn fetch_alerts(&mut self) -> Result<Vec<EmergencyAlert>> {
        Ok(self.alerts.clone())
    }
}

/// A source whose backend is unreachable; every fetch fails
#[derive(Debug, Clone, Default)]
pub struct UnavailableSource;

impl FleetDataSource for UnavailableSource {
    fn fetch_vehicles(&mut self) -> Result<Vec<TrackedVehicle>> {
        bail!("fleet service unreachable")
    }

    fn fetch_bookings(&mut self) -> Result<Vec<Booking>> {
        bail!("fleet service unreachable")
    }

    fn fetch_alerts(&mut self) -> Result<Vec<EmergencyAlert>> {
        bail!("fleet service unreachable")
    }
}

/// Fetch vehicles, degrading to a seeded fleet of `fallback_size` on failure
pub fn vehicles_or_seed(
    source: &mut dyn FleetDataSource,
    seeder: &mut FleetSeeder,
    fallback_size: usize,
    now: SystemTime,
) -> Vec<TrackedVehicle> {
    match source.fetch_vehicles() {
        Ok(vehicles) => {
            info!("fetched {} vehicles from fleet service", vehicles.len());
            vehicles
        }
        Err(err) => {
            warn!("vehicle fetch failed ({err:#}); seeding {fallback_size} local vehicles");
            seeder.vehicles(fallback_size, now)
        }
    }
}

/// Fetch bookings, degrading to seeded bookings on failure
pub fn bookings_or_seed(
    source: &mut dyn FleetDataSource,
    seeder: &mut FleetSeeder,
    fallback_size: usize,
    vehicles: &[TrackedVehicle],
    now: SystemTime,
) -> Vec<Booking> {
    match source.fetch_bookings() {
        Ok(bookings) => {
            info!("fetched {} bookings from fleet service", bookings.len());
            bookings
        }
        Err(err) => {
            warn!("booking fetch failed ({err:#}); seeding {fallback_size} local bookings");
            seeder.bookings(fallback_size, vehicles, now)
        }
    }
}

/// Fetch alerts, degrading to the seeded alert set on failure
pub fn alerts_or_seed(
    source: &mut dyn FleetDataSource,
    seeder: &FleetSeeder,
    now: SystemTime,
) -> Vec<EmergencyAlert> {
    match source.fetch_alerts() {
        Ok(alerts) => {
            info!("fetched {} alerts from fleet service", alerts.len());
            alerts
        }
        Err(err) => {
            warn!("alert fetch failed ({err:#}); using seeded alerts");
            seeder.alerts(now)
        }
    }
}
