use crate::node::structs::edge_node::EdgeNode;
use crate::registry::structs::slave_record::ControlSender;
use crate::websocket::enums::control_message::ControlMessage;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

/// Master-side actor for one slave's control WebSocket.
pub struct ControlConnection {
    pub node: Arc<EdgeNode>,
    pub connection_id: Uuid,
    pub remote_ip: Option<IpAddr>,
    pub identity: Option<String>,
    pub sender: ControlSender,
    pub receiver: Option<UnboundedReceiver<ControlMessage>>,
}
