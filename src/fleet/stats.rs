//! Derived aggregate views over fleet snapshots
//!
//! Pure functions: one pass over the input, no mutation, and a defined zero
//! result for empty snapshots (averages never produce NaN).

use super::bookings::{self, Booking};
use super::types::VehicleStatus;
use super::vehicle::TrackedVehicle;

/// Summary statistics for one fleet snapshot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub available: usize,
    pub offline: usize,
    pub avg_fuel: f64,
    pub avg_health: f64,
    pub total_mileage: u64,
}

impl FleetStats {
    /// Compute aggregates in a single pass over the snapshot
    pub fn compute(snapshot: &[TrackedVehicle]) -> FleetStats {
        let mut stats = FleetStats {
            total: snapshot.len(),
            ..FleetStats::default()
        };
        let mut fuel_sum: u64 = 0;
        let mut health_sum: u64 = 0;

        for vehicle in snapshot {
            match vehicle.status {
                VehicleStatus::Active => stats.active += 1,
                VehicleStatus::Maintenance => stats.maintenance += 1,
                VehicleStatus::Available => stats.available += 1,
                VehicleStatus::Offline => stats.offline += 1,
            }
            fuel_sum += u64::from(vehicle.fuel);
            health_sum += u64::from(vehicle.health);
            stats.total_mileage += u64::from(vehicle.mileage);
        }

        if stats.total > 0 {
            stats.avg_fuel = fuel_sum as f64 / stats.total as f64;
            stats.avg_health = health_sum as f64 / stats.total as f64;
        }
        stats
    }

    /// Rough km/l estimate derived from the average fuel level
    pub fn fuel_efficiency(&self) -> f64 {
        self.avg_fuel / 10.0
    }
}

/// Fleet statistics combined with booking-derived figures, matching the
/// top-of-dashboard stat cards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub fleet: FleetStats,
    /// Bookings still occupying the fleet (pending, assigned, in progress)
    pub open_bookings: usize,
    /// Sum of fares across completed bookings
    pub revenue: u64,
}

impl DashboardStats {
    pub fn compute(vehicles: &[TrackedVehicle], booking_list: &[Booking]) -> DashboardStats {
        DashboardStats {
            fleet: FleetStats::compute(vehicles),
            open_bookings: bookings::count_open(booking_list),
            revenue: bookings::total_revenue(booking_list),
        }
    }
}
