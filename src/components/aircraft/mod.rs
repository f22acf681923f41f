pub mod behavior;
pub mod config;
pub mod path;
pub mod phase;
pub mod state;

pub use behavior::Behavior;
pub use config::AircraftConfig;
pub use path::PlanePath;
pub use phase::{FlightPhase, Junction};
pub use state::{AircraftState, SpawnOrder};
