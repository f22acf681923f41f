use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resources::airport::layout;

/// Named decision points of the route graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Junction {
    Base,
    CrosswindRn,
}

impl Junction {
    pub const ALL: [Junction; 2] = [Junction::Base, Junction::CrosswindRn];

    /// Segment name the junction sits on.
    pub fn name(&self) -> &'static str {
        match self {
            Junction::Base => layout::BASE,
            Junction::CrosswindRn => layout::CROSSWIND,
        }
    }

    pub fn from_segment_name(name: &str) -> Option<Junction> {
        Junction::ALL.into_iter().find(|j| j.name() == name)
    }
}

/// Whether the aircraft is inbound to land or outbound after takeoff.
///
/// Arrival and departure routing share the circuit and only diverge at junctions; the
/// lookup below is exhaustive over every (phase, junction) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    Arriving,
    Departing,
}

impl FlightPhase {
    pub const ALL: [FlightPhase; 2] = [FlightPhase::Arriving, FlightPhase::Departing];

    /// Segment to follow out of `junction`, or `None` to keep the current link.
    pub fn junction_action(&self, junction: Junction) -> Option<&'static str> {
        match (self, junction) {
            (FlightPhase::Arriving, Junction::Base) => Some(layout::FINAL),
            (FlightPhase::Arriving, Junction::CrosswindRn) => Some(layout::DOWNWIND),
            (FlightPhase::Departing, Junction::Base) => Some(layout::DEPARTURE_WEST),
            (FlightPhase::Departing, Junction::CrosswindRn) => Some(layout::DEPARTURE_NORTH),
        }
    }

    /// Name used by the persistence format.
    pub fn name(&self) -> &'static str {
        match self {
            FlightPhase::Arriving => "Arriving",
            FlightPhase::Departing => "Departing",
        }
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlightPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightPhase::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown plane state '{}'", s))
    }
}
