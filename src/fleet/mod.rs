//! Standalone fleet simulation module
//!
//! Contains the live-state simulator, aggregate views, seed generators and
//! the external boundary contracts (data source, session store). Everything
//! here runs headless; the CLI binary is just one subscriber.

mod alerts;
mod bookings;
mod seed;
mod session;
mod simulator;
mod source;
mod stats;
mod telemetry;
mod ticker;
mod types;
mod vehicle;

pub use alerts::{count_unresolved, AlertKind, AlertSeverity, AlertStatus, EmergencyAlert};
pub use bookings::{count_open, total_revenue, Booking, BookingStatus};
pub use seed::FleetSeeder;
pub use session::{
    KeyValueStore, MemoryStore, SessionContext, UserIdentity, UserRole, TOKEN_KEY, USER_KEY,
};
pub use simulator::{LiveSimulator, SubscriberId};
pub use source::{
    alerts_or_seed, bookings_or_seed, vehicles_or_seed, FleetDataSource, StaticSource,
    UnavailableSource,
};
pub use stats::{DashboardStats, FleetStats};
pub use telemetry::{TelemetryProbe, TelemetrySample};
pub use ticker::{CancelToken, Clock, ManualClock, WallClock};
pub use types::{
    GeoPosition, Place, VehicleKind, VehicleStatus, DEFAULT_CENTER, DEFAULT_RADIUS_KM,
    DRIFT_BOUND_DEG,
};
pub use vehicle::TrackedVehicle;
