//! Live simulator behavior tests
//!
//! All tests drive the simulator with a manual clock, so no wall-clock time
//! passes and every run is deterministic.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, SystemTime};

use fleet_sim::fleet::{
    Clock, FleetSeeder, GeoPosition, LiveSimulator, ManualClock, TrackedVehicle, VehicleKind,
    VehicleStatus, DRIFT_BOUND_DEG,
};

const INTERVAL: Duration = Duration::from_secs(5);

fn seeded_fleet(count: usize) -> Vec<TrackedVehicle> {
    FleetSeeder::with_seed(42).vehicles(count, SystemTime::UNIX_EPOCH)
}

fn single_vehicle() -> TrackedVehicle {
    TrackedVehicle {
        id: "V1".to_string(),
        model: "Toyota Innova".to_string(),
        kind: VehicleKind::Sedan,
        status: VehicleStatus::Active,
        license_plate: "TS 01 AB 0001".to_string(),
        position: GeoPosition::new(10.0, 20.0),
        address: "Hitech City, Hyderabad".to_string(),
        fuel: 50,
        health: 90,
        mileage: 12_000,
        driver_id: None,
        last_update: SystemTime::UNIX_EPOCH,
    }
}

#[test]
fn ids_and_statuses_preserved_across_ticks() {
    let seed = seeded_fleet(25);
    let expected: Vec<(String, VehicleStatus)> = seed
        .iter()
        .map(|v| (v.id.clone(), v.status))
        .collect();

    let mut sim = LiveSimulator::with_seed(7);
    let mut clock = ManualClock::at_epoch();
    sim.start(INTERVAL, seed);
    let ran = sim.run_ticks(&mut clock, 10);
    assert_eq!(ran, 10);

    let got: Vec<(String, VehicleStatus)> = sim
        .snapshot()
        .iter()
        .map(|v| (v.id.clone(), v.status))
        .collect();
    assert_eq!(got, expected, "ids and statuses must survive drift in order");
}

#[test]
fn drift_stays_within_bound_every_tick() {
    let seed = seeded_fleet(10);
    let published: Rc<RefCell<Vec<Vec<TrackedVehicle>>>> = Rc::new(RefCell::new(Vec::new()));

    let mut sim = LiveSimulator::with_seed(11);
    let sink = Rc::clone(&published);
    sim.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.to_vec()));

    let mut clock = ManualClock::at_epoch();
    sim.start(INTERVAL, seed.clone());
    sim.run_ticks(&mut clock, 5);

    let published = published.borrow();
    assert_eq!(published.len(), 5);

    let mut prev = &seed;
    for snapshot in published.iter() {
        for (before, after) in prev.iter().zip(snapshot.iter()) {
            let dlat = (after.position.lat - before.position.lat).abs();
            let dlng = (after.position.lng - before.position.lng).abs();
            assert!(dlat <= DRIFT_BOUND_DEG, "lat drift {dlat} over bound");
            assert!(dlng <= DRIFT_BOUND_DEG, "lng drift {dlng} over bound");
        }
        prev = snapshot;
    }
}

#[test]
fn single_vehicle_example_from_seed() {
    let mut sim = LiveSimulator::with_seed(3);
    let mut clock = ManualClock::at_epoch();
    sim.start(INTERVAL, vec![single_vehicle()]);
    sim.run_ticks(&mut clock, 1);

    let v = &sim.snapshot()[0];
    assert_eq!(v.id, "V1");
    assert_eq!(v.status, VehicleStatus::Active);
    assert_eq!(v.fuel, 50);
    assert_eq!(v.health, 90);
    assert!(v.position.lat >= 9.9995 && v.position.lat <= 10.0005);
    assert!(v.position.lng >= 19.9995 && v.position.lng <= 20.0005);
    // last_update is stamped from the driving clock, not the wall clock
    assert_eq!(v.last_update, SystemTime::UNIX_EPOCH);
}

#[test]
fn stop_prevents_further_publishes() {
    let publish_count = Rc::new(RefCell::new(0usize));

    let mut sim = LiveSimulator::with_seed(5);
    let counter = Rc::clone(&publish_count);
    sim.subscribe(move |_| *counter.borrow_mut() += 1);

    let mut clock = ManualClock::at_epoch();
    sim.start(INTERVAL, seeded_fleet(4));
    sim.run_ticks(&mut clock, 3);
    assert_eq!(*publish_count.borrow(), 3);

    sim.stop();
    // Drive well past several intervals; nothing may be published
    sim.run_ticks(&mut clock, 10);
    sim.run(&mut clock);
    assert_eq!(*publish_count.borrow(), 3);
    assert!(!sim.is_running());
}

#[test]
fn stop_without_start_is_safe() {
    let mut sim = LiveSimulator::new();
    sim.stop();
    assert!(!sim.is_running());
}

#[test]
fn double_start_keeps_first_seed_and_timer() {
    let publish_count = Rc::new(RefCell::new(0usize));

    let mut sim = LiveSimulator::with_seed(9);
    let counter = Rc::clone(&publish_count);
    sim.subscribe(move |_| *counter.borrow_mut() += 1);

    let mut clock = ManualClock::at_epoch();
    sim.start(INTERVAL, seeded_fleet(6));
    // Second start must be ignored: no re-seed, no duplicate timer
    sim.start(Duration::from_millis(1), seeded_fleet(99));

    sim.run_ticks(&mut clock, 2);
    assert_eq!(sim.snapshot().len(), 6);
    assert_eq!(*publish_count.borrow(), 2);
}

#[test]
fn subscribers_run_in_registration_order() {
    let order: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));

    let mut sim = LiveSimulator::with_seed(1);
    let first = Rc::clone(&order);
    let a = sim.subscribe(move |_| first.borrow_mut().push(1));
    let second = Rc::clone(&order);
    sim.subscribe(move |_| second.borrow_mut().push(2));

    let mut clock = ManualClock::at_epoch();
    sim.start(INTERVAL, seeded_fleet(2));
    sim.run_ticks(&mut clock, 2);
    assert_eq!(*order.borrow(), vec![1, 2, 1, 2]);

    assert!(sim.unsubscribe(a));
    assert!(!sim.unsubscribe(a), "second unsubscribe reports false");
    sim.run_ticks(&mut clock, 1);
    assert_eq!(*order.borrow(), vec![1, 2, 1, 2, 2]);
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut clock_a = ManualClock::at_epoch();
    let mut sim_a = LiveSimulator::with_seed(21);
    sim_a.start(INTERVAL, seeded_fleet(8));
    sim_a.run_ticks(&mut clock_a, 5);

    let mut clock_b = ManualClock::at_epoch();
    let mut sim_b = LiveSimulator::with_seed(21);
    sim_b.start(INTERVAL, seeded_fleet(8));
    sim_b.run_ticks(&mut clock_b, 5);

    assert_eq!(sim_a.snapshot(), sim_b.snapshot());
}

#[test]
fn subscriber_can_cancel_via_token() {
    let mut sim = LiveSimulator::with_seed(2);
    let token = sim.cancel_token();
    let count = Rc::new(RefCell::new(0u64));
    let counter = Rc::clone(&count);
    sim.subscribe(move |_| {
        *counter.borrow_mut() += 1;
        if *counter.borrow() == 3 {
            token.cancel();
        }
    });

    let mut clock = ManualClock::at_epoch();
    sim.start(INTERVAL, seeded_fleet(3));
    // Unbounded run must return once the token fires
    sim.run(&mut clock);
    assert_eq!(*count.borrow(), 3);
    assert!(!sim.is_running());
    // A cancel raised inside the third tick returns without sleeping again:
    // only the two sleeps between the three ticks ever ran
    assert_eq!(clock.now(), SystemTime::UNIX_EPOCH + INTERVAL * 2);
}

#[test]
fn tick_timestamps_follow_the_clock() {
    let mut sim = LiveSimulator::with_seed(4);
    let mut clock = ManualClock::at_epoch();
    sim.start(INTERVAL, seeded_fleet(2));
    sim.run_ticks(&mut clock, 2);

    // Second tick happens one interval after the first
    let expected = SystemTime::UNIX_EPOCH + INTERVAL;
    for v in sim.snapshot() {
        assert_eq!(v.last_update, expected);
    }
    assert_eq!(sim.ticks(), 2);
}
