use bevy::prelude::*;

use crate::components::AircraftState;
use crate::resources::{SimulationBounds, SimulationConfig};

/// System despawning aircraft that finished inside the area or left it.
pub fn traffic_cleanup_system(
    mut commands: Commands,
    query: Query<(Entity, &AircraftState)>,
    config: Res<SimulationConfig>,
) {
    for (entity, state) in query.iter() {
        if should_remove(state, &config.bounds) {
            commands.entity(entity).despawn();
        }
    }
}

/// Removal rule applied at the end of every tick.
pub fn should_remove(state: &AircraftState, bounds: &SimulationBounds) -> bool {
    if state.marked_for_removal {
        info!("{} marked for removal, cleaning up", state.name);
        return true;
    }
    if state.is_out_of_bounds(bounds) {
        info!("{} is out of the simulation area", state.name);
        return true;
    }
    false
}
