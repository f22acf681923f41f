//! Saved traffic: the flat per-aircraft record and the file formats it is written in.

use serde::{Deserialize, Serialize};

use crate::components::{AircraftConfig, AircraftState, Behavior, FlightPhase};
use crate::resources::RouteGraph;
use crate::utils::SimError;

/// One aircraft as written to disk.
///
/// The route and plane state are stored by name. `behavior` and `speed` may be missing from
/// older files, in which case the aircraft is restored holding at the route's nominal speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedAircraft {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub route: String,
    #[serde(rename = "planeState")]
    pub plane_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Behavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl PersistedAircraft {
    pub fn from_state(state: &AircraftState, graph: &RouteGraph) -> Self {
        Self {
            name: state.name.clone(),
            x: state.spatial.position.x,
            y: state.spatial.position.y,
            heading: state.spatial.heading,
            route: graph.name(state.route).to_string(),
            plane_state: state.phase.name().to_string(),
            behavior: Some(state.behavior),
            speed: Some(state.spatial.speed),
        }
    }

    /// Construction parameters for this entry. The route is resolved when the aircraft
    /// is added to a simulation.
    pub fn to_config(&self) -> Result<AircraftConfig, SimError> {
        let phase: FlightPhase =
            self.plane_state
                .parse()
                .map_err(|_| SimError::UnknownPlaneState {
                    aircraft: self.name.clone(),
                    state: self.plane_state.clone(),
                })?;

        let mut config =
            AircraftConfig::new(&self.name, self.x, self.y, self.heading, &self.route, phase)
                .with_behavior(self.behavior.unwrap_or_default());
        config.speed = self.speed;
        Ok(config)
    }
}

/// A list of saved aircraft in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    pub entries: Vec<PersistedAircraft>,
}

impl TrafficSnapshot {
    pub fn new(entries: Vec<PersistedAircraft>) -> Self {
        Self { entries }
    }

    pub fn load_yaml(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    pub fn save_yaml(&self, path: &str) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save_json(&self, path: &str) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}
