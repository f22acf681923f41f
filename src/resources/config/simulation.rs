use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::resources::airport::AirportConfig;
use crate::resources::TransformationResource;
use crate::utils::{
    SimError, DEFAULT_BOUNDS_HEIGHT, DEFAULT_BOUNDS_WIDTH, DEFAULT_MARKER_SIZE, DEFAULT_MAX_RATE,
    DEFAULT_TRAIL_LENGTH,
};

/// Rectangular simulation area in simulation coordinates. Aircraft leaving it are purged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for SimulationBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOUNDS_WIDTH,
            height: DEFAULT_BOUNDS_HEIGHT,
        }
    }
}

impl SimulationBounds {
    /// Edges are inside.
    pub fn contains(&self, position: &Vector2<f64>) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}

/// Rendering-side geometry kept alongside each aircraft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Number of past positions kept in the trail
    pub trail_length: usize,
    /// Length of the heading marker from nose to tail
    pub marker_size: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            trail_length: DEFAULT_TRAIL_LENGTH,
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub bounds: SimulationBounds,
    /// Device-independent pixels per simulation unit
    pub dips_per_unit: f64,
    pub path: PathConfig,
    /// Upper bound of the tick multiplier
    pub max_rate: u32,
    pub airport: AirportConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bounds: SimulationBounds::default(),
            dips_per_unit: 1.0,
            path: PathConfig::default(),
            max_rate: DEFAULT_MAX_RATE,
            airport: AirportConfig::default_layout(),
        }
    }
}

impl SimulationConfig {
    pub fn load(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.bounds.width > 0.0 && self.bounds.height > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "bounds must be positive, got {}x{}",
                self.bounds.width, self.bounds.height
            )));
        }
        if self.max_rate == 0 {
            return Err(SimError::InvalidConfig("max_rate must be at least 1".to_string()));
        }
        TransformationResource::new(self.dips_per_unit)?;
        Ok(())
    }
}
