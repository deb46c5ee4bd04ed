//! Customer bookings
//!
//! Bookings feed the dashboard aggregates: open bookings count towards the
//! current workload, completed bookings towards revenue.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::types::Place;

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

/// A customer trip request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Stable unique identifier, e.g. "BK-000001"
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub vehicle_id: Option<String>,
    pub driver_id: Option<String>,
    pub status: BookingStatus,
    pub pickup: Place,
    pub destination: Place,
    pub scheduled_time: SystemTime,
    pub completed_time: Option<SystemTime>,
    /// Fare in whole currency units, set once the trip completes
    pub fare: Option<u32>,
    /// Customer rating 1-5, set once the trip completes
    pub rating: Option<u8>,
}

impl Booking {
    /// A booking still occupying the fleet: pending, assigned or in progress
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            BookingStatus::Pending | BookingStatus::Assigned | BookingStatus::InProgress
        )
    }
}

/// Count bookings that still occupy the fleet
pub fn count_open(bookings: &[Booking]) -> usize {
    bookings.iter().filter(|b| b.is_open()).count()
}

/// Sum of fares across completed bookings
pub fn total_revenue(bookings: &[Booking]) -> u64 {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .filter_map(|b| b.fare)
        .map(u64::from)
        .sum()
}
