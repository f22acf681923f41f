mod dips;
mod traits;

pub use dips::TransformationResource;
pub use traits::{CoordinateConverter, TransformError};
