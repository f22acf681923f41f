use nalgebra::Vector2;
use std::f64::consts::PI;

use crate::utils::constants::{HEADING_SCREEN_OFFSET_DEG, KMH_TO_MS, TICK_HOURS_DIVISOR};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Unit vector for a compass heading in screen space (x right, y down).
pub fn heading_unit_vector(heading_deg: f64) -> Vector2<f64> {
    let angle = deg_to_rad(heading_deg - HEADING_SCREEN_OFFSET_DEG);
    Vector2::new(angle.cos(), angle.sin())
}

/// Distance covered during one tick at `speed`.
#[inline]
pub fn tick_distance(speed: f64) -> f64 {
    speed / TICK_HOURS_DIVISOR / KMH_TO_MS
}

/// Displacement for one tick at `speed` along `heading_deg`.
pub fn tick_displacement(speed: f64, heading_deg: f64) -> Vector2<f64> {
    heading_unit_vector(heading_deg) * tick_distance(speed)
}
