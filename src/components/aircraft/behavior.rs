use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resources::RouteSegment;

/// Motion-control mode of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Behavior {
    /// Follows the route and takes junction decisions
    Normal,
    /// Keeps circling on the current route links, junction decisions are skipped
    #[default]
    Holding,
    /// Stops at the next runway threshold until cleared
    RunwayWait,
    /// Frozen in place
    Stopped,
}

impl Behavior {
    pub const ALL: [Behavior; 4] = [
        Behavior::Normal,
        Behavior::Holding,
        Behavior::RunwayWait,
        Behavior::Stopped,
    ];

    /// Behavior actually applied when `requested` is asked for on `segment`.
    ///
    /// A full stop is only possible on ground-holding segments; anywhere else it becomes a
    /// wait at the next runway threshold.
    pub fn resolve_request(requested: Behavior, segment: &RouteSegment) -> Behavior {
        match requested {
            Behavior::Stopped if !segment.allows_ground_hold() => Behavior::RunwayWait,
            other => other,
        }
    }

    pub fn evaluates_junctions(&self) -> bool {
        *self != Behavior::Holding
    }

    pub fn is_frozen(&self) -> bool {
        *self == Behavior::Stopped
    }

    pub fn name(&self) -> &'static str {
        match self {
            Behavior::Normal => "Normal",
            Behavior::Holding => "Holding",
            Behavior::RunwayWait => "RunwayWait",
            Behavior::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Behavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Behavior::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| format!("unknown behavior '{}'", s))
    }
}
