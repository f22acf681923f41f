use approx::assert_relative_eq;
use atc_sim::AircraftSnapshot;
use nalgebra::Vector2;

/// Assert that an aircraft snapshot holds finite, consistent values
#[track_caller]
pub fn assert_aircraft_valid(aircraft: &AircraftSnapshot) {
    assert!(aircraft.position.x.is_finite(), "Position x is not finite");
    assert!(aircraft.position.y.is_finite(), "Position y is not finite");
    assert!(aircraft.speed.is_finite(), "Speed is not finite");
    assert!(aircraft.speed >= 0.0, "Speed must not be negative");
    assert!(
        aircraft.outline.iter().all(|p| p.x.is_finite() && p.y.is_finite()),
        "Outline contains non-finite values"
    );
}

/// Assert that two positions are equal within tolerance
#[track_caller]
pub fn assert_position_eq(actual: &Vector2<f64>, expected: &Vector2<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
}

/// Assert that an aircraft is currently following `route`
#[track_caller]
pub fn assert_route(aircraft: &AircraftSnapshot, route: &str) {
    assert_eq!(
        aircraft.route, route,
        "{} is on {} instead of {}",
        aircraft.name, aircraft.route, route
    );
}
