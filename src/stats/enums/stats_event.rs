//! Statistics event types.

use serde::{
    Deserialize,
    Serialize
};

/// Every counter that can be incremented or set through
/// `EdgeNode::update_stats()`.
///
/// - **Ws***: control channel activity (both roles)
/// - **PeerUpdates***: master broadcast deliveries
/// - **Redirects / ServedLocal / ServeFailures / PeerFetches**: client and peer HTTP traffic
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    WsConnectionsActive,
    WsAuthSuccess,
    WsAuthFailed,
    WsReconnects,
    PeerUpdatesSent,
    PeerUpdatesFailed,
    Redirects,
    ServedLocal,
    ServeFailures,
    PeerFetches,
}
