use crate::cache::errors::CacheError;
use crate::cache::structs::distributed_cache::DistributedCache;
use crate::cache::structs::http_origin::HttpOrigin;
use crate::cache::traits::cache_adapter::CacheAdapter;
use crate::config::enums::cluster_mode::ClusterMode;
use crate::config::structs::configuration::Configuration;
use crate::drain::structs::drain_state::DrainState;
use crate::node::structs::edge_node::EdgeNode;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::stats::structs::stats_atomics::StatsAtomics;
use log::info;
use std::sync::Arc;
use std::time::Duration;

impl EdgeNode {
    pub fn new(config: Arc<Configuration>, mode: ClusterMode, cache: Arc<dyn CacheAdapter>) -> EdgeNode
    {
        EdgeNode {
            config,
            mode,
            registry: PeerRegistry::new(),
            drain: DrainState::new(),
            cache,
            stats: StatsAtomics::new(),
            self_identity: Default::default(),
        }
    }

    /// Builds a node with the HTTP-backed distributed cache. A master points
    /// its origin at the mirror right away; a slave learns it at login.
    pub fn bootstrap(config: Arc<Configuration>, mode: ClusterMode) -> Result<EdgeNode, CacheError>
    {
        let origin = Arc::new(HttpOrigin::new(Duration::from_secs(config.cache.origin_timeout))?);
        let cache = DistributedCache::new(&config.cache, origin)?;
        if mode.is_master() {
            cache.set_origin(&config.node.mirror)?;
            info!("[BOOT] Running as master, mirror: {}", config.node.mirror);
        } else {
            info!("[BOOT] Running as slave, upstream: {}", config.node.upstream);
        }
        Ok(EdgeNode::new(config, mode, Arc::new(cache)))
    }

    pub fn is_master(&self) -> bool {
        self.mode.is_master()
    }

    pub fn set_self_identity(&self, identity: &str) {
        *self.self_identity.write() = Some(identity.to_string());
    }

    pub fn self_identity(&self) -> Option<String> {
        self.self_identity.read().clone()
    }
}
