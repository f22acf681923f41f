pub mod airport;
pub mod config;
mod transformations;

pub use airport::{
    AirportConfig, FinalAlignment, RouteGraph, RouteId, RouteSegment, RouteSpec, RunwayUsage,
    SegmentKind,
};
pub use config::{PathConfig, SimulationBounds, SimulationConfig};
pub use transformations::{CoordinateConverter, TransformError, TransformationResource};
