use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::{
    heading_unit_vector, FINAL_ALIGNMENT_LOWER, FINAL_ALIGNMENT_OFFSET, FINAL_ALIGNMENT_UPPER,
};

/// Stable index of a segment inside a [`RouteGraph`](super::RouteGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub(crate) usize);

/// Which end of the speed ramp a runway segment models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayUsage {
    /// Accelerates from the threshold towards the far end
    Takeoff,
    /// Decelerates as the aircraft rolls out
    Landing,
}

/// Lateral correction applied while flying the final approach leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalAlignment {
    /// Snap when the junction offset is at or above this value
    pub upper: f64,
    /// Snap when the junction offset is at or below this value
    pub lower: f64,
    /// Offset past the segment start the y-coordinate is snapped to
    pub offset: f64,
}

impl Default for FinalAlignment {
    fn default() -> Self {
        Self {
            upper: FINAL_ALIGNMENT_UPPER,
            lower: FINAL_ALIGNMENT_LOWER,
            offset: FINAL_ALIGNMENT_OFFSET,
        }
    }
}

impl FinalAlignment {
    // Only offsets strictly between `lower` and `upper` skip the snap.
    pub fn should_align(&self, diff_y: f64) -> bool {
        diff_y >= self.upper || diff_y <= self.lower
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentKind {
    /// Ground segment where an aircraft may be held stopped
    Taxiway,
    /// Airborne circuit, holding or departure leg
    Air,
    /// Final approach leg with y-alignment correction
    Final(FinalAlignment),
    /// Runway segment with a linear speed ramp
    Runway { length: f64, usage: RunwayUsage },
}

/// One named leg of the airport route graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub name: String,
    /// Entry point of the segment in simulation coordinates
    pub start: Vector2<f64>,
    /// Compass heading flown along the segment [deg]
    pub heading: f64,
    /// Nominal speed along the segment [units/h]
    pub speed: f64,
    /// Divisors of the current speed giving the junction window, per axis
    pub precision_x: u32,
    pub precision_y: u32,
    pub kind: SegmentKind,
    /// Arrivals reaching this segment are parked and removed
    pub arrival_terminus: bool,
    pub(crate) next: Option<RouteId>,
}

impl RouteSegment {
    pub fn next_route(&self) -> Option<RouteId> {
        self.next
    }

    pub fn is_runway(&self) -> bool {
        matches!(self.kind, SegmentKind::Runway { .. })
    }

    /// Ground-holding segments are the only ones where a full stop can be requested.
    pub fn allows_ground_hold(&self) -> bool {
        matches!(self.kind, SegmentKind::Taxiway)
    }

    /// Half-width of the junction window for an aircraft arriving at this segment.
    pub fn transition_window(&self, current_speed: f64) -> Vector2<f64> {
        Vector2::new(
            current_speed / self.precision_x as f64,
            current_speed / self.precision_y as f64,
        )
    }

    /// Speed flown at `position` while on this segment.
    ///
    /// Non-runway segments always return the nominal speed. Runway segments ramp linearly:
    /// takeoff as `x / end_x`, landing as `start_x / x`. The ratio is clamped to `[0, 1]`;
    /// a zero denominator or a position short of the segment start falls back to nominal.
    pub fn speed_at(&self, position: &Vector2<f64>) -> f64 {
        let SegmentKind::Runway { length, usage } = self.kind else {
            return self.speed;
        };

        let progress = (position - self.start).dot(&heading_unit_vector(self.heading));
        if progress < 0.0 {
            debug!(
                "{}: position {:?} has not entered the runway, using nominal speed",
                self.name, position
            );
            return self.speed;
        }

        let (numerator, denominator) = match usage {
            RunwayUsage::Takeoff => (position.x, self.start.x + length),
            RunwayUsage::Landing => (self.start.x, position.x),
        };
        if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
            warn!(
                "{}: degenerate runway geometry ({} / {}), keeping nominal speed",
                self.name, numerator, denominator
            );
            return self.speed;
        }

        self.speed * (numerator / denominator).clamp(0.0, 1.0)
    }
}
