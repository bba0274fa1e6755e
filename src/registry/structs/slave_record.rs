use crate::websocket::enums::control_message::ControlMessage;
use std::sync::atomic::AtomicU64;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

pub type ControlSender = UnboundedSender<ControlMessage>;

#[derive(Debug)]
pub struct SlaveRecord {
    pub identity: String,
    pub connection_id: Uuid,
    pub sender: ControlSender,
    pub connected_at: Instant,
    /// Reserved for load-aware routing; routing does not read it.
    pub active_downloads: AtomicU64,
}
