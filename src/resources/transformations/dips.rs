use bevy::prelude::*;

use crate::resources::transformations::traits::*;

/// Resource that converts between simulation coordinates and device-independent pixels
#[derive(Resource, Debug, Clone, Copy)]
pub struct TransformationResource {
    /// Scale factor in dips per simulation unit
    dips_per_unit: f64,
}

impl Default for TransformationResource {
    fn default() -> Self {
        Self { dips_per_unit: 1.0 }
    }
}

impl TransformationResource {
    /// Create a new transformation resource with a specific scale
    pub fn new(dips_per_unit: f64) -> Result<Self, TransformError> {
        if !dips_per_unit.is_finite() || dips_per_unit <= 0.0 {
            return Err(TransformError::InvalidScale(dips_per_unit));
        }
        Ok(Self { dips_per_unit })
    }
}

impl CoordinateConverter for TransformationResource {
    fn dips_from_coordinate(&self, value: f64) -> f64 {
        value * self.dips_per_unit
    }

    fn get_scale(&self) -> f64 {
        self.dips_per_unit
    }
}
