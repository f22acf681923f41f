mod cleanup;
mod update;

pub use cleanup::{should_remove, traffic_cleanup_system};
pub use update::{traffic_update_system, update_aircraft};
