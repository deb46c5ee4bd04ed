//! Seed generators for fleet data
//!
//! Produces the locally generated fleet used when no remote data source is
//! reachable. With a seeded RNG the output is fully reproducible.

use std::time::{Duration, SystemTime};

use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::alerts::{AlertKind, AlertSeverity, AlertStatus, EmergencyAlert};
use super::bookings::{Booking, BookingStatus};
use super::types::{
    GeoPosition, Place, VehicleKind, VehicleStatus, DEFAULT_CENTER, DEFAULT_RADIUS_KM,
    KM_PER_DEGREE,
};
use super::vehicle::TrackedVehicle;

const MODELS: [&str; 6] = [
    "Toyota Innova",
    "Maruti Swift",
    "Hyundai Creta",
    "Tata Nexon",
    "Mahindra XUV700",
    "Honda City",
];

const KINDS: [VehicleKind; 5] = [
    VehicleKind::Sedan,
    VehicleKind::Suv,
    VehicleKind::Truck,
    VehicleKind::Van,
    VehicleKind::Bus,
];

/// Weighted status pool: most of the fleet is on the road
const STATUS_POOL: [VehicleStatus; 6] = [
    VehicleStatus::Active,
    VehicleStatus::Active,
    VehicleStatus::Active,
    VehicleStatus::Maintenance,
    VehicleStatus::Available,
    VehicleStatus::Offline,
];

const ADDRESSES: [&str; 15] = [
    "Hitech City, Hyderabad",
    "Banjara Hills, Hyderabad",
    "Jubilee Hills, Hyderabad",
    "Gachibowli, Hyderabad",
    "Madhapur, Hyderabad",
    "Kondapur, Hyderabad",
    "Kukatpally, Hyderabad",
    "Secunderabad Railway Station",
    "HITEC City Metro Station",
    "Charminar, Hyderabad",
    "Hussain Sagar Lake",
    "Rajiv Gandhi International Airport",
    "LB Nagar, Hyderabad",
    "Ameerpet, Hyderabad",
    "SR Nagar, Hyderabad",
];

const CUSTOMER_NAMES: [&str; 5] = [
    "Rahul Sharma",
    "Priya Patel",
    "Amit Kumar",
    "Sneha Reddy",
    "Vikram Singh",
];

/// Generator for mock fleet entities around a city center
pub struct FleetSeeder {
    center: GeoPosition,
    radius_km: f64,
    /// Optional seeded RNG for reproducible fleets
    rng: Option<StdRng>,
}

impl Default for FleetSeeder {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetSeeder {
    pub fn new() -> Self {
        Self {
            center: DEFAULT_CENTER,
            radius_km: DEFAULT_RADIUS_KM,
            rng: None,
        }
    }

    /// Create a seeder with a seeded RNG for reproducible output
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
            ..Self::new()
        }
    }

    /// Override the city center and radius the fleet is scattered over
    pub fn with_center(mut self, center: GeoPosition, radius_km: f64) -> Self {
        self.center = center;
        self.radius_km = radius_km;
        self
    }

    /// Get a random value in the given range, using the seeded RNG if available
    fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Choose a random element from a slice, using the seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    /// Uniform random point in a square of `radius_km` around the center
    fn random_location(&mut self) -> GeoPosition {
        let radius_deg = self.radius_km / KM_PER_DEGREE;
        let dlat = self.random_range(-radius_deg..=radius_deg);
        let dlng = self.random_range(-radius_deg..=radius_deg);
        self.center.offset(dlat, dlng)
    }

    /// Generate `count` vehicles with stable sequential ids
    pub fn vehicles(&mut self, count: usize, now: SystemTime) -> Vec<TrackedVehicle> {
        (0..count)
            .map(|i| {
                let status = *self
                    .choose_random(&STATUS_POOL)
                    .unwrap_or(&VehicleStatus::Available);
                let district: u32 = self.random_range(0..99);
                let plate_no: u32 = self.random_range(0..9999);
                let age_secs: u64 = self.random_range(0..3600);

                TrackedVehicle {
                    id: format!("VH-{:04}", i + 1),
                    model: MODELS[i % MODELS.len()].to_string(),
                    kind: KINDS[i % KINDS.len()],
                    status,
                    license_plate: format!("TS {:02} AB {:04}", district, plate_no),
                    position: self.random_location(),
                    address: ADDRESSES[i % ADDRESSES.len()].to_string(),
                    fuel: 40 + self.random_range(0..60u8),
                    health: 70 + self.random_range(0..30u8),
                    mileage: 10_000 + self.random_range(0..100_000u32),
                    driver_id: if i % 3 == 0 {
                        None
                    } else {
                        Some(format!("DR-{:04}", i + 1))
                    },
                    last_update: now - Duration::from_secs(age_secs),
                }
            })
            .collect()
    }

    /// Generate `count` bookings, cycling through all lifecycle states.
    /// Assigned vehicles are drawn from `vehicles` when it is non-empty.
    pub fn bookings(
        &mut self,
        count: usize,
        vehicles: &[TrackedVehicle],
        now: SystemTime,
    ) -> Vec<Booking> {
        const STATUS_CYCLE: [BookingStatus; 5] = [
            BookingStatus::Pending,
            BookingStatus::Assigned,
            BookingStatus::InProgress,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ];

        (0..count)
            .map(|i| {
                let status = STATUS_CYCLE[i % STATUS_CYCLE.len()];
                let completed = status == BookingStatus::Completed;
                let assigned = i % 3 != 0 && !vehicles.is_empty();

                let pickup = Place::new(self.random_location(), ADDRESSES[i % ADDRESSES.len()]);
                let destination =
                    Place::new(self.random_location(), ADDRESSES[(i + 5) % ADDRESSES.len()]);

                let completed_age: u64 = self.random_range(0..86_400);
                let fare: u32 = 200 + self.random_range(0..500u32);
                let rating: u8 = 4 + self.random_range(0..2u8);

                Booking {
                    id: format!("BK-{:06}", i + 1),
                    customer_id: format!("CU-{:04}", i + 1),
                    customer_name: CUSTOMER_NAMES[i % CUSTOMER_NAMES.len()].to_string(),
                    vehicle_id: assigned.then(|| vehicles[i % vehicles.len()].id.clone()),
                    driver_id: assigned.then(|| format!("DR-{:04}", (i % 10) + 1)),
                    status,
                    pickup,
                    destination,
                    scheduled_time: offset_by_hours(now, i as i64 - 5),
                    completed_time: completed.then(|| now - Duration::from_secs(completed_age)),
                    fare: completed.then_some(fare),
                    rating: completed.then_some(rating),
                }
            })
            .collect()
    }

    /// The fixed set of emergency alerts the dashboard starts with
    pub fn alerts(&self, now: SystemTime) -> Vec<EmergencyAlert> {
        vec![
            EmergencyAlert {
                id: "EM-001".to_string(),
                kind: AlertKind::Ambulance,
                severity: AlertSeverity::High,
                location: Place::new(
                    GeoPosition::new(17.4156, 78.4347),
                    "Apollo Hospital, Jubilee Hills",
                ),
                destination: Place::new(
                    GeoPosition::new(17.3850, 78.4867),
                    "NIMS Hospital, Punjagutta",
                ),
                status: AlertStatus::Responding,
                timestamp: now,
                eta_minutes: Some(8),
            },
            EmergencyAlert {
                id: "EM-002".to_string(),
                kind: AlertKind::FireTruck,
                severity: AlertSeverity::High,
                location: Place::new(
                    GeoPosition::new(17.4435, 78.3772),
                    "Fire Station, Kukatpally",
                ),
                destination: Place::new(
                    GeoPosition::new(17.4615, 78.3552),
                    "Industrial Area, JNTU",
                ),
                status: AlertStatus::Active,
                timestamp: now - Duration::from_secs(600),
                eta_minutes: Some(12),
            },
            EmergencyAlert {
                id: "EM-003".to_string(),
                kind: AlertKind::Police,
                severity: AlertSeverity::Medium,
                location: Place::new(
                    GeoPosition::new(17.3616, 78.4747),
                    "Charminar Police Station",
                ),
                destination: Place::new(GeoPosition::new(17.3720, 78.4800), "Old City, Hyderabad"),
                status: AlertStatus::Responding,
                timestamp: now - Duration::from_secs(1200),
                eta_minutes: Some(5),
            },
        ]
    }
}

/// Shift a timestamp by a signed number of hours
fn offset_by_hours(base: SystemTime, hours: i64) -> SystemTime {
    let delta = Duration::from_secs(hours.unsigned_abs() * 3600);
    if hours >= 0 {
        base + delta
    } else {
        base - delta
    }
}
