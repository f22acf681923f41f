mod staging;
mod traffic;
mod transformation;

pub use staging::TrafficSet;
pub use traffic::TrafficPlugin;
pub use transformation::TransformationPlugin;
