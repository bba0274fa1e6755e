use crate::common::common::join_peers;
use crate::node::structs::edge_node::EdgeNode;
use crate::registry::structs::broadcast_report::BroadcastReport;
use crate::stats::enums::stats_event::StatsEvent;
use crate::websocket::enums::control_message::ControlMessage;
use log::{
    info,
    warn
};

impl EdgeNode {
    /// Sends the registry's current membership to `targets` as a
    /// `PEER_UPDATE`.
    pub fn broadcast_peer_update(&self, targets: &[String]) -> BroadcastReport
    {
        let peers = join_peers(&self.registry.keys());
        let message = ControlMessage::PEER_UPDATE { peers: peers.clone() };
        let report = self.registry.broadcast(targets, &message);

        self.update_stats(StatsEvent::PeerUpdatesSent, report.delivered as i64);
        self.update_stats(StatsEvent::PeerUpdatesFailed, report.failed.len() as i64);
        if !report.failed.is_empty() {
            warn!("[CLUSTER MASTER] Peer update not delivered to: {}", report.failed.join(", "));
        }
        if !targets.is_empty() {
            info!("[CLUSTER MASTER] Peer update [{peers}] sent to {} slave(s)", report.delivered);
        }
        report
    }
}
