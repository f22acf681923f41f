use atc_sim::{
    components::{AircraftConfig, Behavior, FlightPhase},
    resources::airport::layout,
};

use crate::common::{
    arrival_on_downwind, assert_aircraft_valid, assert_route, create_test_simulation,
    departure_at_alpha, find_aircraft, record_routes, run_until,
};

#[test]
fn test_departure_leaves_through_north_exit() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(departure_at_alpha("AF123")).unwrap();

    let routes = record_routes(&mut sim, "AF123", 500);
    assert_eq!(
        routes,
        vec![
            layout::ALPHA,
            layout::RUNWAY_TAKEOFF,
            layout::UPWIND,
            layout::CROSSWIND,
            layout::DEPARTURE_NORTH
        ]
    );
    assert_eq!(sim.aircraft_count(), 0);
}

#[test]
fn test_takeoff_roll_accelerates() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(departure_at_alpha("AF123")).unwrap();

    let entered = run_until(&mut sim, 100, |sim| {
        find_aircraft(sim, "AF123").is_some_and(|a| a.route == layout::RUNWAY_TAKEOFF)
    });
    assert!(entered.is_some());

    let mut last_speed = 0.0;
    for _ in 0..10 {
        let aircraft = find_aircraft(&mut sim, "AF123").unwrap();
        assert_aircraft_valid(&aircraft);
        if aircraft.route != layout::RUNWAY_TAKEOFF {
            break;
        }
        assert!(aircraft.speed > last_speed);
        assert!(aircraft.speed <= layout::TAKEOFF_SPEED);
        last_speed = aircraft.speed;
        sim.tick();
    }
}

#[test]
fn test_arrival_lands_and_is_removed_at_terminus() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(arrival_on_downwind("AF123")).unwrap();

    let routes = record_routes(&mut sim, "AF123", 500);
    assert_eq!(
        routes,
        vec![
            layout::DOWNWIND,
            layout::BASE,
            layout::FINAL,
            layout::RUNWAY_LANDING,
            layout::BRAVO,
            layout::CHARLIE
        ]
    );
    assert_eq!(sim.aircraft_count(), 0);
}

#[test]
fn test_holding_arrival_keeps_circling() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(
        AircraftConfig::new("AF123", 1700.0, 200.0, 270.0, layout::DOWNWIND, FlightPhase::Arriving),
    )
    .unwrap();

    let routes = record_routes(&mut sim, "AF123", 400);
    assert_eq!(&routes[..5], &[
        layout::DOWNWIND,
        layout::BASE,
        layout::HOLDING,
        layout::HOLDING_NORTH,
        layout::DOWNWIND
    ]);
    assert!(!routes.iter().any(|r| r == layout::FINAL));
    assert_eq!(sim.aircraft_count(), 1);

    // Cleared to land, the next pass through Base turns onto Final
    assert_eq!(sim.set_behavior("AF123", Behavior::Normal).unwrap(), Behavior::Normal);
    let landed = run_until(&mut sim, 500, |sim| sim.aircraft_count() == 0);
    assert!(landed.is_some());
}

#[test]
fn test_departure_from_downwind_leaves_west() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(
        AircraftConfig::new("AF123", 1700.0, 200.0, 270.0, layout::DOWNWIND, FlightPhase::Departing)
            .with_behavior(Behavior::Normal),
    )
    .unwrap();

    let routes = record_routes(&mut sim, "AF123", 200);
    assert_eq!(
        routes,
        vec![layout::DOWNWIND, layout::BASE, layout::DEPARTURE_WEST]
    );
    assert_eq!(
        sim.route_graph()
            .segment(layout::BASE)
            .and_then(|base| base.next_route())
            .map(|next| sim.route_graph().name(next).to_string()),
        Some(layout::DEPARTURE_WEST.to_string())
    );
}

#[test]
fn test_runway_wait_holds_short_until_cleared() {
    let mut sim = create_test_simulation();
    sim.add_aircraft(departure_at_alpha("AF123").with_behavior(Behavior::RunwayWait))
        .unwrap();

    let stopped = run_until(&mut sim, 100, |sim| {
        find_aircraft(sim, "AF123").is_some_and(|a| a.behavior == Behavior::Stopped)
    });
    assert!(stopped.is_some());

    let held = find_aircraft(&mut sim, "AF123").unwrap();
    assert_route(&held, layout::ALPHA);
    sim.tick();
    let still = find_aircraft(&mut sim, "AF123").unwrap();
    assert_eq!(still.position, held.position);

    sim.set_behavior("AF123", Behavior::Normal).unwrap();
    sim.tick();
    let cleared = find_aircraft(&mut sim, "AF123").unwrap();
    assert_route(&cleared, layout::RUNWAY_TAKEOFF);
}
