use atc_sim::{
    components::{AircraftConfig, Behavior, FlightPhase},
    resources::{airport::layout, SimulationBounds, SimulationConfig},
    Simulation,
};

use crate::common::{arrival_on_downwind, create_test_simulation, departure_at_alpha};

#[test]
fn test_out_of_bounds_aircraft_purged() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(
        AircraftConfig::new(
            "WEST",
            5.0,
            300.0,
            270.0,
            layout::DEPARTURE_WEST,
            FlightPhase::Departing,
        )
        .with_behavior(Behavior::Normal),
    )
    .unwrap();
    sim.add_aircraft(
        AircraftConfig::new(
            "NORTH",
            1915.0,
            450.0,
            45.0,
            layout::DEPARTURE_NORTH,
            FlightPhase::Departing,
        )
        .with_behavior(Behavior::Normal),
    )
    .unwrap();
    sim.add_aircraft(arrival_on_downwind("STAY")).unwrap();

    sim.tick();

    let names: Vec<_> = sim.snapshots().into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["STAY"]);
}

#[test]
fn test_smaller_area_purges_earlier() {
    let config = SimulationConfig {
        bounds: SimulationBounds {
            width: 1000.0,
            height: 1080.0,
        },
        ..Default::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    sim.add_aircraft(arrival_on_downwind("AF123")).unwrap();

    sim.tick();
    assert_eq!(sim.aircraft_count(), 0);
}

#[test]
fn test_terminal_segment_keeps_flying_until_out_of_bounds() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(
        AircraftConfig::new(
            "AF123",
            240.0,
            300.0,
            270.0,
            layout::DEPARTURE_WEST,
            FlightPhase::Departing,
        )
        .with_behavior(Behavior::Normal),
    )
    .unwrap();

    // 300 km/h covers 240 units in six ticks
    sim.tick();
    sim.tick();
    sim.tick();
    sim.tick();
    sim.tick();
    assert_eq!(sim.aircraft_count(), 1);
    sim.tick();
    assert_eq!(sim.aircraft_count(), 0);
}

#[test]
fn test_remove_if() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(departure_at_alpha("DEP")).unwrap();
    sim.add_aircraft(arrival_on_downwind("ARR")).unwrap();

    let removed = sim.remove_if(|state| state.phase == FlightPhase::Arriving);
    assert_eq!(removed, 1);
    assert_eq!(sim.snapshots()[0].name, "DEP");
    assert_eq!(sim.remove_if(|_| false), 0);
}

#[test]
fn test_clear_restores_authored_links() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(
        AircraftConfig::new("AF123", 1700.0, 530.0, 0.0, layout::CROSSWIND, FlightPhase::Departing)
            .with_behavior(Behavior::Normal),
    )
    .unwrap();
    sim.tick();

    let crosswind_next = |sim: &Simulation| {
        let graph = sim.route_graph();
        graph
            .segment(layout::CROSSWIND)
            .and_then(|s| s.next_route())
            .map(|id| graph.name(id).to_string())
    };
    assert_eq!(crosswind_next(&sim).as_deref(), Some(layout::DEPARTURE_NORTH));

    sim.clear();
    assert_eq!(sim.aircraft_count(), 0);
    assert_eq!(crosswind_next(&sim).as_deref(), Some(layout::DOWNWIND));

    // Names are free again after a clear
    sim.add_aircraft(departure_at_alpha("AF123")).unwrap();
}
