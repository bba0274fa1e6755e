use crate::cache::traits::cache_adapter::CacheAdapter;
use crate::config::enums::cluster_mode::ClusterMode;
use crate::config::structs::configuration::Configuration;
use crate::drain::structs::drain_state::DrainState;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::stats::structs::stats_atomics::StatsAtomics;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct EdgeNode {
    pub config: Arc<Configuration>,
    pub mode: ClusterMode,
    pub registry: PeerRegistry,
    pub drain: Arc<DrainState>,
    pub cache: Arc<dyn CacheAdapter>,
    pub stats: StatsAtomics,
    /// Identity assigned by the master; always `None` on the master itself.
    pub self_identity: RwLock<Option<String>>,
}
