use crate::node::structs::edge_node::EdgeNode;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use std::sync::atomic::{
    AtomicI64,
    Ordering
};

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(chrono::Utc::now().timestamp(), Ordering::SeqCst);
        stats
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::WsConnectionsActive => &self.ws_connections_active,
            StatsEvent::WsAuthSuccess => &self.ws_auth_success,
            StatsEvent::WsAuthFailed => &self.ws_auth_failed,
            StatsEvent::WsReconnects => &self.ws_reconnects,
            StatsEvent::PeerUpdatesSent => &self.peer_updates_sent,
            StatsEvent::PeerUpdatesFailed => &self.peer_updates_failed,
            StatsEvent::Redirects => &self.redirects,
            StatsEvent::ServedLocal => &self.served_local,
            StatsEvent::ServeFailures => &self.serve_failures,
            StatsEvent::PeerFetches => &self.peer_fetches,
        }
    }
}

impl EdgeNode {
    pub fn get_stats(&self) -> Stats
    {
        let stats = &self.stats;
        Stats {
            started: stats.started.load(Ordering::SeqCst),
            ws_connections_active: stats.ws_connections_active.load(Ordering::SeqCst),
            ws_auth_success: stats.ws_auth_success.load(Ordering::SeqCst),
            ws_auth_failed: stats.ws_auth_failed.load(Ordering::SeqCst),
            ws_reconnects: stats.ws_reconnects.load(Ordering::SeqCst),
            peer_updates_sent: stats.peer_updates_sent.load(Ordering::SeqCst),
            peer_updates_failed: stats.peer_updates_failed.load(Ordering::SeqCst),
            redirects: stats.redirects.load(Ordering::SeqCst),
            served_local: stats.served_local.load(Ordering::SeqCst),
            serve_failures: stats.serve_failures.load(Ordering::SeqCst),
            peer_fetches: stats.peer_fetches.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }
}
