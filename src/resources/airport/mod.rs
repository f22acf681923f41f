mod config;
mod graph;
pub mod layout;
mod route;

pub use config::{AirportConfig, RouteSpec};
pub use graph::RouteGraph;
pub use route::{FinalAlignment, RouteId, RouteSegment, RunwayUsage, SegmentKind};
