pub mod drain_state;
pub mod drain_guard;
