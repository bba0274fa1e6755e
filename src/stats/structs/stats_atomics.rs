use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub ws_connections_active: AtomicI64,
    pub ws_auth_success: AtomicI64,
    pub ws_auth_failed: AtomicI64,
    pub ws_reconnects: AtomicI64,
    pub peer_updates_sent: AtomicI64,
    pub peer_updates_failed: AtomicI64,
    pub redirects: AtomicI64,
    pub served_local: AtomicI64,
    pub serve_failures: AtomicI64,
    pub peer_fetches: AtomicI64,
}
