use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{AircraftConfig, Behavior, FlightPhase};
use crate::components::SpatialComponent;
use crate::resources::{RouteGraph, RouteId, SimulationBounds};
use crate::utils::SimError;

/// Insertion order into the simulation; aircraft are updated in ascending order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

/// State of one simulated aircraft.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Unique call sign
    pub name: String,
    pub spatial: SpatialComponent,
    /// Current segment in the shared route graph
    pub route: RouteId,
    pub behavior: Behavior,
    pub phase: FlightPhase,
    /// Set when the aircraft has reached its end of life inside the simulation area
    pub marked_for_removal: bool,
}

impl AircraftState {
    /// Build an aircraft from construction parameters, resolving the route by name.
    pub fn from_config(config: &AircraftConfig, graph: &RouteGraph) -> Result<Self, SimError> {
        let route = graph
            .id(&config.route)
            .ok_or_else(|| SimError::UnresolvedPersistedRoute {
                aircraft: config.name.clone(),
                route: config.route.clone(),
            })?;

        Ok(Self {
            name: config.name.clone(),
            spatial: SpatialComponent::new(
                config.position,
                config.heading,
                config.speed.unwrap_or(graph.get(route).speed),
            ),
            route,
            behavior: config.behavior,
            phase: config.phase,
            marked_for_removal: false,
        })
    }

    /// Apply a behavior request, downgrading a stop away from ground-holding segments.
    pub fn set_behavior(&mut self, requested: Behavior, graph: &RouteGraph) -> Behavior {
        self.behavior = Behavior::resolve_request(requested, graph.get(self.route));
        info!(
            "{}: behavior requested {}, applied {}",
            self.name, requested, self.behavior
        );
        self.behavior
    }

    pub fn is_out_of_bounds(&self, bounds: &SimulationBounds) -> bool {
        !bounds.contains(&self.spatial.position)
    }
}
