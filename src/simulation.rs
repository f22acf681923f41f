use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::{
    AircraftConfig, AircraftState, Behavior, FlightPhase, PlanePath, SpawnOrder,
};
use crate::persistence::{PersistedAircraft, TrafficSnapshot};
use crate::plugins::TrafficPlugin;
use crate::resources::{RouteGraph, SimulationConfig};
use crate::utils::SimError;

/// Read-only view of one aircraft for drawing and inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSnapshot {
    pub name: String,
    pub position: Vector2<f64>,
    pub heading: f64,
    pub speed: f64,
    pub route: String,
    pub behavior: Behavior,
    pub phase: FlightPhase,
    pub marked_for_removal: bool,
    pub outline: [Vector2<f64>; 3],
    /// Oldest position first
    pub trail: Vec<Vector2<f64>>,
}

/// Outcome of restoring saved traffic.
#[derive(Debug, Default)]
pub struct RestoreReport {
    pub restored: usize,
    /// Entries that could not be loaded, with the reason
    pub skipped: Vec<(String, SimError)>,
}

/// Owns the ECS world holding the route graph and every live aircraft.
pub struct Simulation {
    app: App,
    rate: u32,
    next_order: u64,
}

impl Simulation {
    /// Build a simulation from a validated configuration. A malformed airport aborts here.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        let plugin = TrafficPlugin::new(config)?;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(plugin);

        Ok(Self {
            app,
            rate: 1,
            next_order: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        self.app.world().resource::<SimulationConfig>()
    }

    pub fn route_graph(&self) -> &RouteGraph {
        self.app.world().resource::<RouteGraph>()
    }

    /// Insert an aircraft at the end of the processing order.
    pub fn add_aircraft(&mut self, config: AircraftConfig) -> Result<(), SimError> {
        if self.find(&config.name).is_some() {
            return Err(SimError::DuplicateAircraft(config.name));
        }

        let world = self.app.world();
        let state = AircraftState::from_config(&config, world.resource::<RouteGraph>())?;
        let path = PlanePath::new(
            &world.resource::<SimulationConfig>().path,
            state.spatial.position,
            state.spatial.heading,
        );

        info!(
            "Adding {} ({}) on {} at ({:.1}, {:.1})",
            state.name,
            state.phase,
            config.route,
            state.spatial.position.x,
            state.spatial.position.y
        );

        let order = SpawnOrder(self.next_order);
        self.next_order += 1;
        self.app
            .world_mut()
            .spawn((state, path, order, Name::new(config.name)));
        Ok(())
    }

    /// Run exactly one tick.
    pub fn tick(&mut self) {
        self.app.update();
    }

    /// Run `rate` ticks.
    pub fn advance(&mut self) {
        for _ in 0..self.rate {
            self.tick();
        }
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Double the tick multiplier up to the configured maximum.
    pub fn forward(&mut self) -> u32 {
        let max_rate = self.config().max_rate;
        self.rate = (self.rate * 2).min(max_rate);
        debug!("Simulation rate x{}", self.rate);
        self.rate
    }

    /// Halve the tick multiplier down to one.
    pub fn backward(&mut self) -> u32 {
        self.rate = (self.rate / 2).max(1);
        debug!("Simulation rate x{}", self.rate);
        self.rate
    }

    /// Request a behavior for a live aircraft and return the one actually applied.
    pub fn set_behavior(&mut self, name: &str, behavior: Behavior) -> Result<Behavior, SimError> {
        let entity = self
            .find(name)
            .ok_or_else(|| SimError::AircraftNotFound(name.to_string()))?;

        self.app
            .world_mut()
            .resource_scope(|world, graph: Mut<RouteGraph>| {
                let mut state = world
                    .get_mut::<AircraftState>(entity)
                    .ok_or_else(|| SimError::AircraftNotFound(name.to_string()))?;
                Ok(state.set_behavior(behavior, &graph))
            })
    }

    pub fn aircraft_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query::<&AircraftState>().iter(world).count()
    }

    /// Every live aircraft in processing order.
    pub fn snapshots(&mut self) -> Vec<AircraftSnapshot> {
        let world = self.app.world_mut();
        let mut aircraft: Vec<_> = world
            .query::<(&SpawnOrder, &AircraftState, &PlanePath)>()
            .iter(world)
            .collect();
        aircraft.sort_by_key(|(order, _, _)| **order);

        let graph = world.resource::<RouteGraph>();
        aircraft
            .into_iter()
            .map(|(_, state, path)| AircraftSnapshot {
                name: state.name.clone(),
                position: state.spatial.position,
                heading: state.spatial.heading,
                speed: state.spatial.speed,
                route: graph.name(state.route).to_string(),
                behavior: state.behavior,
                phase: state.phase,
                marked_for_removal: state.marked_for_removal,
                outline: *path.outline(),
                trail: path.trail().copied().collect(),
            })
            .collect()
    }

    /// Despawn every aircraft matching `predicate`, returning how many were removed.
    pub fn remove_if<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&AircraftState) -> bool,
    {
        let world = self.app.world_mut();
        let doomed: Vec<Entity> = world
            .query::<(Entity, &AircraftState)>()
            .iter(world)
            .filter(|(_, state)| predicate(*state))
            .map(|(entity, _)| entity)
            .collect();

        for entity in &doomed {
            world.despawn(*entity);
        }
        doomed.len()
    }

    /// Remove all aircraft and undo every junction rewrite.
    pub fn clear(&mut self) {
        let removed = self.remove_if(|_| true);
        self.app
            .world_mut()
            .resource_mut::<RouteGraph>()
            .restore_authored_links();
        self.next_order = 0;
        info!("Cleared {} aircraft", removed);
    }

    /// Persisted form of every live aircraft in processing order.
    pub fn save_traffic(&mut self) -> TrafficSnapshot {
        let world = self.app.world_mut();
        let mut aircraft: Vec<_> = world
            .query::<(&SpawnOrder, &AircraftState)>()
            .iter(world)
            .collect();
        aircraft.sort_by_key(|(order, _)| **order);

        let graph = world.resource::<RouteGraph>();
        TrafficSnapshot::new(
            aircraft
                .into_iter()
                .map(|(_, state)| PersistedAircraft::from_state(state, graph))
                .collect(),
        )
    }

    /// Add every loadable entry; the others are reported and skipped.
    pub fn restore(&mut self, entries: &[PersistedAircraft]) -> RestoreReport {
        let mut report = RestoreReport::default();
        for entry in entries {
            match entry.to_config().and_then(|config| self.add_aircraft(config)) {
                Ok(()) => report.restored += 1,
                Err(e) => {
                    warn!("Skipping saved aircraft {}: {}", entry.name, e);
                    report.skipped.push((entry.name.clone(), e));
                }
            }
        }
        info!(
            "Restored {} aircraft, skipped {}",
            report.restored,
            report.skipped.len()
        );
        report
    }

    fn find(&mut self, name: &str) -> Option<Entity> {
        let world = self.app.world_mut();
        world
            .query::<(Entity, &AircraftState)>()
            .iter(world)
            .find(|(_, state)| state.name == name)
            .map(|(entity, _)| entity)
    }
}
