use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::layout;
use super::route::SegmentKind;

/// Authoring form of a route segment; `next` is resolved by name when the graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub name: String,
    pub start: Vector2<f64>,
    pub heading: f64,
    pub speed: f64,
    pub precision_x: u32,
    pub precision_y: u32,
    pub kind: SegmentKind,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub arrival_terminus: bool,
}

impl RouteSpec {
    pub fn new(
        name: &str,
        start: Vector2<f64>,
        heading: f64,
        speed: f64,
        precision: (u32, u32),
        kind: SegmentKind,
    ) -> Self {
        Self {
            name: name.to_string(),
            start,
            heading,
            speed,
            precision_x: precision.0,
            precision_y: precision.1,
            kind,
            next: None,
            arrival_terminus: false,
        }
    }

    pub fn with_next(mut self, next: &str) -> Self {
        self.next = Some(next.to_string());
        self
    }

    pub fn as_arrival_terminus(mut self) -> Self {
        self.arrival_terminus = true;
        self
    }
}

/// The full airport route topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportConfig {
    pub segments: Vec<RouteSpec>,
}

impl Default for AirportConfig {
    fn default() -> Self {
        Self::default_layout()
    }
}

impl AirportConfig {
    /// The hand-authored single-runway airport.
    pub fn default_layout() -> Self {
        Self {
            segments: layout::default_segments(),
        }
    }

    pub fn segment(&self, name: &str) -> Option<&RouteSpec> {
        self.segments.iter().find(|s| s.name == name)
    }

    pub fn segment_mut(&mut self, name: &str) -> Option<&mut RouteSpec> {
        self.segments.iter_mut().find(|s| s.name == name)
    }
}
