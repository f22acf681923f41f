use bevy::prelude::*;

/// Ordering of the per-tick traffic work inside `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TrafficSet {
    /// Route following, junction logic and integration.
    Update,
    /// Despawn of finished or out of bounds aircraft.
    Cleanup,
}
