use nalgebra::Vector2;

/// Conversion between simulation coordinates and device-independent pixels.
///
/// The route-following logic measures junction distances in device-independent units so
/// that the precision windows behave the same whatever the display density is.
pub trait CoordinateConverter {
    /// Convert a simulation-space length to device-independent pixels
    fn dips_from_coordinate(&self, value: f64) -> f64;

    /// Get the current scale factor (dips per simulation unit)
    fn get_scale(&self) -> f64;

    /// Converted offset from `target` to `position`. Both axes use the same scale.
    fn dips_offset(&self, position: &Vector2<f64>, target: &Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            self.dips_from_coordinate(position.x - target.x),
            self.dips_from_coordinate(position.y - target.y),
        )
    }
}

/// Errors that can occur during transformation
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Scale factor is zero, negative or not finite: {0}")]
    InvalidScale(f64),
}
