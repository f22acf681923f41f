use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::tick_displacement;

/// Kinematic state of an aircraft in simulation coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Current position, the single source of truth for location
    pub position: Vector2<f64>,

    /// Compass heading [deg], 0 pointing up the screen
    pub heading: f64,

    /// Ground speed [units/h]
    pub speed: f64,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector2::zeros(),
            heading: 0.0,
            speed: 0.0,
        }
    }
}

impl SpatialComponent {
    pub fn new(position: Vector2<f64>, heading: f64, speed: f64) -> Self {
        Self {
            position,
            heading,
            speed,
        }
    }

    /// Advance the position by one tick at the current speed and heading.
    pub fn integrate(&mut self) {
        self.position += tick_displacement(self.speed, self.heading);
    }
}
