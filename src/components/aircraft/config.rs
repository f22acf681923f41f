use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::{Behavior, FlightPhase};

/// Construction parameters for an aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    pub position: Vector2<f64>,
    /// Initial heading [deg]; replaced by the route heading on the first route update
    pub heading: f64,
    /// Name of the route segment the aircraft starts on
    pub route: String,
    pub phase: FlightPhase,
    #[serde(default)]
    pub behavior: Behavior,
    /// Current speed; the route's nominal speed when absent
    #[serde(default)]
    pub speed: Option<f64>,
}

impl AircraftConfig {
    pub fn new(name: &str, x: f64, y: f64, heading: f64, route: &str, phase: FlightPhase) -> Self {
        Self {
            name: name.to_string(),
            position: Vector2::new(x, y),
            heading,
            route: route.to_string(),
            phase,
            behavior: Behavior::default(),
            speed: None,
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }
}
