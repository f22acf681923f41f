pub mod aircraft;
pub mod spatial;

pub use aircraft::{
    AircraftConfig, AircraftState, Behavior, FlightPhase, Junction, PlanePath, SpawnOrder,
};
pub use spatial::SpatialComponent;
