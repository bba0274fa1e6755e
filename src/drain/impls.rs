pub mod drain_state;
