pub mod simulation;

pub use simulation::{PathConfig, SimulationBounds, SimulationConfig};
