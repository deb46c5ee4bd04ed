//! Telemetry probe tests

use std::time::{Duration, SystemTime};

use fleet_sim::fleet::{FleetSeeder, TelemetryProbe};

#[test]
fn samples_stay_within_sensor_ranges() {
    let now = SystemTime::UNIX_EPOCH;
    let fleet = FleetSeeder::with_seed(13).vehicles(25, now);
    let mut probe = TelemetryProbe::with_seed(13);

    let samples = probe.sample_fleet(&fleet, fleet.len(), now);
    assert_eq!(samples.len(), fleet.len());

    for (vehicle, sample) in fleet.iter().zip(samples.iter()) {
        assert_eq!(sample.vehicle_id, vehicle.id);
        assert_eq!(sample.timestamp, now);
        // Fuel and position mirror the vehicle, not a fresh random draw
        assert_eq!(sample.fuel, vehicle.fuel);
        assert_eq!(sample.position, vehicle.position);
        assert!(sample.speed_kmh >= 20 && sample.speed_kmh <= 79);
        assert!(sample.engine_health >= 80 && sample.engine_health <= 99);
        assert!(sample.brake_health >= 75 && sample.brake_health <= 99);
        assert!(sample.tire_health >= 85 && sample.tire_health <= 99);
    }
}

#[test]
fn sample_fleet_respects_the_limit() {
    let now = SystemTime::UNIX_EPOCH;
    let fleet = FleetSeeder::with_seed(2).vehicles(10, now);
    let mut probe = TelemetryProbe::with_seed(2);

    let samples = probe.sample_fleet(&fleet, 3, now);
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0].vehicle_id, fleet[0].id);
    assert_eq!(samples[2].vehicle_id, fleet[2].id);

    // A limit past the end samples the whole fleet
    let all = probe.sample_fleet(&fleet, 50, now);
    assert_eq!(all.len(), 10);
}

#[test]
fn seeded_probes_are_reproducible() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(60);
    let fleet = FleetSeeder::with_seed(99).vehicles(8, now);

    let samples_a = TelemetryProbe::with_seed(7).sample_fleet(&fleet, fleet.len(), now);
    let samples_b = TelemetryProbe::with_seed(7).sample_fleet(&fleet, fleet.len(), now);
    assert_eq!(samples_a, samples_b);
}
