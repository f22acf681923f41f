//! Default airport: one east-west runway, a ground loop south of it, a left-hand circuit
//! with a holding racetrack, and two departure exits.
//!
//! ```text
//!      Downwind (y 200) <------------------------------- HoldingNorth/CrosswindRN
//!  Base |  DepartureWest <-                                   ^   ^  DepartureNorth (NE)
//!       |-> Holding (y 400) ----------------------------------|   |
//!       v                                                         |
//!  Final (y 530) -> RunwayLDG / RunwayTO (y 540, x 470..1470) -> Upwind
//!                   ^ Alpha                          Bravo v
//!                   +------------ Charlie (y 655) <-------+
//! ```

use nalgebra::Vector2;

use super::config::RouteSpec;
use super::route::{FinalAlignment, RunwayUsage, SegmentKind};

pub const ALPHA: &str = "Alpha";
pub const BRAVO: &str = "Bravo";
pub const CHARLIE: &str = "Charlie";
pub const RUNWAY_TAKEOFF: &str = "RunwayTO";
pub const RUNWAY_LANDING: &str = "RunwayLDG";
pub const UPWIND: &str = "Upwind";
pub const CROSSWIND: &str = "CrosswindRN";
pub const DOWNWIND: &str = "Downwind";
pub const BASE: &str = "Base";
pub const FINAL: &str = "Final";
pub const HOLDING: &str = "Holding";
pub const HOLDING_NORTH: &str = "HoldingNorth";
pub const DEPARTURE_NORTH: &str = "DepartureNorth";
pub const DEPARTURE_WEST: &str = "DepartureWest";

pub const RUNWAY_LENGTH: f64 = 1000.0;
pub const TAXI_SPEED: f64 = 40.0;
pub const TAKEOFF_SPEED: f64 = 250.0;
pub const LANDING_SPEED: f64 = 200.0;
pub const CIRCUIT_SPEED: f64 = 300.0;

fn taxiway(name: &str, x: f64, y: f64, heading: f64, precision: (u32, u32)) -> RouteSpec {
    RouteSpec::new(
        name,
        Vector2::new(x, y),
        heading,
        TAXI_SPEED,
        precision,
        SegmentKind::Taxiway,
    )
}

fn circuit(name: &str, x: f64, y: f64, heading: f64) -> RouteSpec {
    RouteSpec::new(
        name,
        Vector2::new(x, y),
        heading,
        CIRCUIT_SPEED,
        (4, 4),
        SegmentKind::Air,
    )
}

pub(crate) fn default_segments() -> Vec<RouteSpec> {
    let runway = |usage| SegmentKind::Runway {
        length: RUNWAY_LENGTH,
        usage,
    };

    vec![
        // Ground
        taxiway(ALPHA, 470.0, 655.0, 0.0, (4, 4)).with_next(RUNWAY_TAKEOFF),
        taxiway(BRAVO, 1470.0, 540.0, 180.0, (5, 5)).with_next(CHARLIE),
        taxiway(CHARLIE, 1470.0, 655.0, 270.0, (2, 5))
            .with_next(ALPHA)
            .as_arrival_terminus(),
        // Runway
        RouteSpec::new(
            RUNWAY_TAKEOFF,
            Vector2::new(470.0, 540.0),
            90.0,
            TAKEOFF_SPEED,
            (5, 5),
            runway(RunwayUsage::Takeoff),
        )
        .with_next(UPWIND),
        RouteSpec::new(
            RUNWAY_LANDING,
            Vector2::new(470.0, 540.0),
            90.0,
            LANDING_SPEED,
            (8, 8),
            runway(RunwayUsage::Landing),
        )
        .with_next(BRAVO),
        // Circuit
        circuit(UPWIND, 1470.0, 540.0, 90.0).with_next(CROSSWIND),
        circuit(CROSSWIND, 1700.0, 540.0, 0.0).with_next(DOWNWIND),
        circuit(DOWNWIND, 1700.0, 200.0, 270.0).with_next(BASE),
        circuit(BASE, 250.0, 200.0, 180.0).with_next(HOLDING),
        RouteSpec::new(
            FINAL,
            Vector2::new(250.0, 530.0),
            90.0,
            LANDING_SPEED,
            (4, 4),
            SegmentKind::Final(FinalAlignment::default()),
        )
        .with_next(RUNWAY_LANDING),
        // Holding racetrack
        circuit(HOLDING, 250.0, 400.0, 90.0).with_next(HOLDING_NORTH),
        circuit(HOLDING_NORTH, 1700.0, 400.0, 0.0).with_next(DOWNWIND),
        // Departure exits, flown until the aircraft leaves the simulation area
        circuit(DEPARTURE_NORTH, 1700.0, 450.0, 45.0),
        circuit(DEPARTURE_WEST, 250.0, 300.0, 270.0),
    ]
}
