// Kinematics
pub const TICK_HOURS_DIVISOR: f64 = 2.0; // one tick covers half a speed unit
pub const KMH_TO_MS: f64 = 3.6;
pub const HEADING_SCREEN_OFFSET_DEG: f64 = 90.0; // compass 0 deg points up the screen

// Simulation area, in simulation coordinates (not device pixels)
pub const DEFAULT_BOUNDS_WIDTH: f64 = 1920.0;
pub const DEFAULT_BOUNDS_HEIGHT: f64 = 1080.0;

// Final approach alignment
pub const FINAL_ALIGNMENT_UPPER: f64 = 5.0;
pub const FINAL_ALIGNMENT_LOWER: f64 = 2.0;
pub const FINAL_ALIGNMENT_OFFSET: f64 = 10.0;

// Rate control
pub const DEFAULT_MAX_RATE: u32 = 8;

// Rendering geometry
pub const DEFAULT_TRAIL_LENGTH: usize = 8;
pub const DEFAULT_MARKER_SIZE: f64 = 12.0;
