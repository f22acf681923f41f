use std::io;
use thiserror::Error;

use crate::resources::TransformError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Route segment '{segment}' references unknown next segment '{next}'")]
    MalformedRouteGraph { segment: String, next: String },

    #[error("Route segment '{0}' is defined more than once")]
    DuplicateSegment(String),

    #[error("Invalid route segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },

    #[error("Junction '{junction}' targets unknown segment '{target}'")]
    UnresolvedJunctionTarget { junction: String, target: String },

    #[error("Aircraft '{aircraft}' references unknown route '{route}'")]
    UnresolvedPersistedRoute { aircraft: String, route: String },

    #[error("Aircraft '{aircraft}' has unknown plane state '{state}'")]
    UnknownPlaneState { aircraft: String, state: String },

    #[error("Aircraft '{0}' already exists")]
    DuplicateAircraft(String),

    #[error("Aircraft not found: {0}")]
    AircraftNotFound(String),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
