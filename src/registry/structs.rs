pub mod broadcast_report;
pub mod peer_registry;
pub mod slave_record;
