use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::resources::PathConfig;
use crate::utils::heading_unit_vector;

/// Rendering geometry for one aircraft: a trail of recent positions and a triangular
/// marker oriented along the heading. Never read by the simulation itself.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanePath {
    trail: VecDeque<Vector2<f64>>,
    trail_length: usize,
    marker_size: f64,
    outline: [Vector2<f64>; 3],
}

impl PlanePath {
    pub fn new(config: &PathConfig, position: Vector2<f64>, heading: f64) -> Self {
        let mut path = Self {
            trail: VecDeque::with_capacity(config.trail_length),
            trail_length: config.trail_length,
            marker_size: config.marker_size,
            outline: [position; 3],
        };
        path.update_points(position, heading);
        path
    }

    /// Recompute the geometry for a new position and heading.
    pub fn update_points(&mut self, position: Vector2<f64>, heading: f64) {
        if self.trail_length > 0 {
            if self.trail.len() == self.trail_length {
                self.trail.pop_front();
            }
            self.trail.push_back(position);
        }

        let forward = heading_unit_vector(heading);
        let right = Vector2::new(-forward.y, forward.x);
        let half = self.marker_size / 2.0;
        self.outline = [
            position + forward * half,
            position - forward * half + right * (half / 2.0),
            position - forward * half - right * (half / 2.0),
        ];
    }

    /// Oldest position first
    pub fn trail(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.trail.iter()
    }

    pub fn outline(&self) -> &[Vector2<f64>; 3] {
        &self.outline
    }

    pub fn nose(&self) -> Vector2<f64> {
        self.outline[0]
    }
}
