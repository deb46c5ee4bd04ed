use std::time::{Duration, SystemTime};

use clap::Parser;
use fleet_sim::fleet::{
    alerts_or_seed, bookings_or_seed, count_unresolved, vehicles_or_seed, Booking, Clock,
    DashboardStats, EmergencyAlert, FleetSeeder, LiveSimulator, MemoryStore, SessionContext,
    TelemetryProbe, TrackedVehicle, UnavailableSource, UserIdentity, UserRole, VehicleStatus,
    WallClock,
};

#[derive(Parser)]
#[command(name = "fleet_sim")]
#[command(about = "Headless fleet telemetry dashboard simulation")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "10")]
    ticks: u64,

    /// Publish interval in milliseconds
    #[arg(long, default_value = "500")]
    interval_ms: u64,

    /// Number of vehicles to seed when the fleet service is unreachable
    #[arg(long, default_value = "25")]
    fleet_size: usize,

    /// Number of bookings to seed when the fleet service is unreachable
    #[arg(long, default_value = "15")]
    bookings: usize,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Draw an ASCII fleet map after each tick
    #[arg(long)]
    map: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Explicit session context instead of any global login state
    let mut session = SessionContext::new(MemoryStore::new());
    session.login(
        &UserIdentity {
            id: "US-0001".to_string(),
            username: "operator".to_string(),
            email: "operator@fleet.example".to_string(),
            role: UserRole::Admin,
        },
        "demo-token",
    );
    if let Some(user) = session.current_user() {
        println!("Welcome back, {}", user.username);
    }

    let mut clock = WallClock;
    let now = clock.now();

    let mut seeder = match cli.seed {
        Some(seed) => FleetSeeder::with_seed(seed),
        None => FleetSeeder::new(),
    };

    // No backend in headless mode; every fetch degrades to seeded data
    let mut source = UnavailableSource;
    let vehicles = vehicles_or_seed(&mut source, &mut seeder, cli.fleet_size, now);
    let bookings = bookings_or_seed(&mut source, &mut seeder, cli.bookings, &vehicles, now);
    let alerts = alerts_or_seed(&mut source, &seeder, now);

    println!(
        "Seeded fleet: {} vehicles, {} bookings, {} unresolved alerts",
        vehicles.len(),
        bookings.len(),
        count_unresolved(&alerts)
    );
    println!();

    let mut simulator = match cli.seed {
        Some(seed) => LiveSimulator::with_seed(seed),
        None => LiveSimulator::new(),
    };

    let mut probe = match cli.seed {
        Some(seed) => TelemetryProbe::with_seed(seed),
        None => TelemetryProbe::new(),
    };

    let token = simulator.cancel_token();
    let max_ticks = cli.ticks;
    let draw_map = cli.map;
    let mut tick_no = 0u64;
    simulator.subscribe(move |snapshot| {
        tick_no += 1;
        print_dashboard(tick_no, snapshot, &bookings, &alerts, &mut probe);
        if draw_map {
            draw_fleet_map(snapshot);
        }
        if tick_no >= max_ticks {
            token.cancel();
        }
    });

    simulator.start(Duration::from_millis(cli.interval_ms), vehicles);
    simulator.run(&mut clock);

    println!("=== Simulation complete: {} ticks ===", simulator.ticks());
}

/// Print one dashboard refresh: stat cards plus a telemetry sample
fn print_dashboard(
    tick: u64,
    snapshot: &[TrackedVehicle],
    bookings: &[Booking],
    alerts: &[EmergencyAlert],
    probe: &mut TelemetryProbe,
) {
    let stats = DashboardStats::compute(snapshot, bookings);
    println!("--- Tick {} ---", tick);
    println!(
        "Vehicles: {} total | {} active | {} in service | {} available | {} offline",
        stats.fleet.total,
        stats.fleet.active,
        stats.fleet.maintenance,
        stats.fleet.available,
        stats.fleet.offline
    );
    println!(
        "Avg fuel: {:.1}% | Avg health: {:.1}% | Fuel efficiency: {:.1} km/l",
        stats.fleet.avg_fuel,
        stats.fleet.avg_health,
        stats.fleet.fuel_efficiency()
    );
    println!(
        "Open bookings: {} | Revenue: {} | Unresolved alerts: {}",
        stats.open_bookings,
        stats.revenue,
        count_unresolved(alerts)
    );

    let sampled_at = snapshot
        .first()
        .map(|v| v.last_update)
        .unwrap_or_else(SystemTime::now);
    let samples = probe.sample_fleet(snapshot, 3, sampled_at);
    for sample in &samples {
        println!(
            "  {} at ({:.4}, {:.4}) doing {} km/h, engine {}%",
            sample.vehicle_id,
            sample.position.lat,
            sample.position.lng,
            sample.speed_kmh,
            sample.engine_health
        );
    }
    println!();
}

/// Draw a character-grid map of the fleet in the terminal
fn draw_fleet_map(snapshot: &[TrackedVehicle]) {
    if snapshot.is_empty() {
        return;
    }

    const WIDTH: usize = 60;
    const HEIGHT: usize = 20;

    // Fleet bounds; spans are floored to keep the projection finite when all
    // vehicles share a coordinate
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;
    for vehicle in snapshot {
        min_lat = min_lat.min(vehicle.position.lat);
        max_lat = max_lat.max(vehicle.position.lat);
        min_lng = min_lng.min(vehicle.position.lng);
        max_lng = max_lng.max(vehicle.position.lng);
    }
    let lat_span = (max_lat - min_lat).max(1e-6);
    let lng_span = (max_lng - min_lng).max(1e-6);

    let mut grid = vec![vec!['.'; WIDTH]; HEIGHT];
    for vehicle in snapshot {
        let col = ((vehicle.position.lng - min_lng) / lng_span * (WIDTH - 1) as f64) as usize;
        let row = ((max_lat - vehicle.position.lat) / lat_span * (HEIGHT - 1) as f64) as usize;
        grid[row.min(HEIGHT - 1)][col.min(WIDTH - 1)] = match vehicle.status {
            VehicleStatus::Active => 'A',
            VehicleStatus::Maintenance => 'M',
            VehicleStatus::Available => 'V',
            VehicleStatus::Offline => 'X',
        };
    }

    println!("Legend: A=Active, M=Maintenance, V=Available, X=Offline");
    for row in &grid {
        let line: String = row.iter().collect();
        println!("{}", line);
    }
    println!();
}
