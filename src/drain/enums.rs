pub mod drain_phase;
pub mod shutdown_outcome;
