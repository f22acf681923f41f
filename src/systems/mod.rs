mod traffic;

pub use traffic::{should_remove, traffic_cleanup_system, traffic_update_system, update_aircraft};
