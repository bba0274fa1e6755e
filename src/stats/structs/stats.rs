use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub ws_connections_active: i64,
    pub ws_auth_success: i64,
    pub ws_auth_failed: i64,
    pub ws_reconnects: i64,
    pub peer_updates_sent: i64,
    pub peer_updates_failed: i64,
    pub redirects: i64,
    pub served_local: i64,
    pub serve_failures: i64,
    pub peer_fetches: i64,
}
