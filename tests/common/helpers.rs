use atc_sim::{
    components::{AircraftConfig, Behavior, FlightPhase},
    resources::{airport::layout, SimulationConfig},
    AircraftSnapshot, Simulation,
};

/// Departure waiting at the start of the Alpha taxiway
pub fn departure_at_alpha(name: &str) -> AircraftConfig {
    AircraftConfig::new(name, 470.0, 655.0, 0.0, layout::ALPHA, FlightPhase::Departing)
        .with_behavior(Behavior::Normal)
}

/// Arrival entering the circuit at the start of the downwind leg
pub fn arrival_on_downwind(name: &str) -> AircraftConfig {
    AircraftConfig::new(name, 1700.0, 200.0, 270.0, layout::DOWNWIND, FlightPhase::Arriving)
        .with_behavior(Behavior::Normal)
}

/// Creates a simulation over the default airport
pub fn create_test_simulation() -> Simulation {
    Simulation::new(SimulationConfig::default()).unwrap()
}

/// Tick until `done` holds or `max_ticks` is reached. Returns the tick count on success.
pub fn run_until<F>(sim: &mut Simulation, max_ticks: usize, mut done: F) -> Option<usize>
where
    F: FnMut(&mut Simulation) -> bool,
{
    for tick in 1..=max_ticks {
        sim.tick();
        if done(sim) {
            return Some(tick);
        }
    }
    None
}

/// Snapshot of a single aircraft by name
pub fn find_aircraft(sim: &mut Simulation, name: &str) -> Option<AircraftSnapshot> {
    sim.snapshots().into_iter().find(|a| a.name == name)
}

/// Every route an aircraft follows until it is removed, in order
pub fn record_routes(sim: &mut Simulation, name: &str, max_ticks: usize) -> Vec<String> {
    let mut routes: Vec<String> = Vec::new();
    for _ in 0..max_ticks {
        let Some(aircraft) = find_aircraft(sim, name) else {
            break;
        };
        if routes.last() != Some(&aircraft.route) {
            routes.push(aircraft.route);
        }
        sim.tick();
    }
    routes
}
