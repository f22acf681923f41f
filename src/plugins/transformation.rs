use bevy::prelude::*;

use crate::resources::TransformationResource;

/// Plugin that sets up the coordinate transformation resource
pub struct TransformationPlugin {
    dips_per_unit: f64,
}

impl TransformationPlugin {
    /// Create a new plugin with the given scale
    pub fn new(dips_per_unit: f64) -> Self {
        Self { dips_per_unit }
    }
}

impl Plugin for TransformationPlugin {
    fn build(&self, app: &mut App) {
        match TransformationResource::new(self.dips_per_unit) {
            Ok(resource) => {
                app.insert_resource(resource);
            }
            Err(e) => {
                error!(
                    "Failed to create transformation resource: {:?}. Defaulting to scale = 1.0",
                    e
                );
                app.insert_resource(TransformationResource::default());
            }
        }
    }
}
