pub mod components;
pub mod persistence;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

mod simulation;

pub use persistence::{PersistedAircraft, TrafficSnapshot};
pub use simulation::{AircraftSnapshot, RestoreReport, Simulation};
pub use utils::SimError;
