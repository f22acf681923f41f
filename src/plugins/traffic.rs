use bevy::ecs::schedule::ExecutorKind;
use bevy::prelude::*;

use crate::plugins::{TrafficSet, TransformationPlugin};
use crate::resources::{RouteGraph, SimulationConfig};
use crate::systems::{traffic_cleanup_system, traffic_update_system};
use crate::utils::SimError;

/// Installs the route graph, the configuration and the per-tick traffic systems.
///
/// The route graph is built and validated when the plugin is created so a
/// malformed airport never reaches the schedule.
pub struct TrafficPlugin {
    config: SimulationConfig,
    graph: RouteGraph,
}

impl TrafficPlugin {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let graph = RouteGraph::from_config(&config.airport)?;
        debug!(
            "Traffic plugin ready: area {}x{}, max rate x{}",
            config.bounds.width, config.bounds.height, config.max_rate
        );
        Ok(Self { config, graph })
    }
}

impl Plugin for TrafficPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TransformationPlugin::new(self.config.dips_per_unit))
            .insert_resource(self.config.clone())
            .insert_resource(self.graph.clone());

        // Aircraft share the mutable route graph and must be processed in
        // spawn order, so the tick stays on one thread.
        app.edit_schedule(Update, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        });

        app.configure_sets(Update, (TrafficSet::Update, TrafficSet::Cleanup).chain())
            .add_systems(Update, traffic_update_system.in_set(TrafficSet::Update))
            .add_systems(Update, traffic_cleanup_system.in_set(TrafficSet::Cleanup));
    }
}
