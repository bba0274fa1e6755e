use crate::cache::errors::CacheError;
use crate::cache::structs::distributed_cache::{
    DistributedCache,
    InflightCell
};
use crate::cache::structs::hash_ring::HashRing;
use crate::cache::structs::peer_view::PeerView;
use crate::cache::traits::cache_adapter::CacheAdapter;
use crate::cache::traits::origin_fetcher::OriginFetcher;
use crate::config::structs::cache_config::CacheConfig;
use async_trait::async_trait;
use bytes::Bytes;
use log::{
    debug,
    info,
    warn
};
use reqwest::Client;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

impl DistributedCache {
    pub fn new(config: &CacheConfig, origin: Arc<dyn OriginFetcher>) -> Result<DistributedCache, CacheError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.origin_timeout))
            .build()
            .map_err(|e| CacheError::Http(e.to_string()))?;
        Ok(DistributedCache {
            group: config.group.clone(),
            peer_path: config.peer_path.clone(),
            cache_bytes: config.cache_bytes,
            origin,
            client,
            self_identity: Default::default(),
            view: Default::default(),
            local: Default::default(),
            local_bytes: Default::default(),
            inflight: Default::default(),
        })
    }

    /// Peer that owns `key`, or `None` when this node does (or there is no
    /// ring yet).
    pub fn owner(&self, key: &str) -> Option<String> {
        let view = self.view.read();
        let owner = view.ring.get(key)?;
        match self.self_identity.read().as_deref() {
            Some(identity) if identity == owner => None,
            _ => Some(owner.to_string()),
        }
    }

    pub fn peer_url(&self, peer: &str, key: &str) -> String {
        format!(
            "{}{}{}/{}",
            peer.trim_end_matches('/'),
            self.peer_path,
            self.group,
            key.trim_start_matches('/')
        )
    }

    async fn load(&self, key: &str, forward: bool) -> Result<Bytes, CacheError> {
        let cached = self.local.read().get(key).cloned();
        if let Some(value) = cached {
            return Ok(value);
        }

        // Every load ending at the local origin shares one slot. A load
        // waiting on a peer never shares with one a peer is waiting on.
        let owner = if forward { self.owner(key) } else { None };
        let slot = (owner.is_some(), key.to_string());
        let cell = self.inflight.lock().entry(slot.clone()).or_default().clone();
        let _release = InflightRelease { cache: self, slot, cell: cell.clone() };
        cell.get_or_init(|| self.fetch(key, owner)).await.clone()
    }

    async fn fetch(&self, key: &str, owner: Option<String>) -> Result<Bytes, CacheError> {
        if let Some(peer) = &owner {
            match self.fetch_from_peer(peer, key).await {
                Ok(value) => return Ok(value),
                Err(e) => warn!("[CACHE] {e}, falling back to origin for {key}"),
            }
        }

        let value = self.origin.fetch(key).await?;
        if owner.is_none() {
            self.store(key, &value);
        }
        Ok(value)
    }

    async fn fetch_from_peer(&self, peer: &str, key: &str) -> Result<Bytes, CacheError> {
        let url = self.peer_url(peer, key);
        debug!("[CACHE] Fetching {key} from peer {url}");
        let response = self.client.get(&url)
            .send()
            .await
            .map_err(|e| CacheError::Peer(format!("{url}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::Peer(format!("{url} returned {status}")));
        }
        response.bytes().await.map_err(|e| CacheError::Peer(format!("{url}: {e}")))
    }

    fn store(&self, key: &str, value: &Bytes) {
        let size = value.len() as u64;
        let mut local = self.local.write();
        if local.contains_key(key) {
            return;
        }
        if self.local_bytes.load(Ordering::SeqCst) + size > self.cache_bytes {
            debug!("[CACHE] Cache full, not keeping {key}");
            return;
        }
        local.insert(key.to_string(), value.clone());
        self.local_bytes.fetch_add(size, Ordering::SeqCst);
    }
}

/// Drops the in-flight entry once its load finished or was cancelled,
/// unless a newer load already replaced it.
struct InflightRelease<'a> {
    cache: &'a DistributedCache,
    slot: (bool, String),
    cell: Arc<InflightCell>,
}

impl Drop for InflightRelease<'_> {
    fn drop(&mut self) {
        let mut inflight = self.cache.inflight.lock();
        if inflight.get(&self.slot).is_some_and(|current| Arc::ptr_eq(current, &self.cell)) {
            inflight.remove(&self.slot);
        }
    }
}

#[async_trait]
impl CacheAdapter for DistributedCache {
    async fn get(&self, key: &str) -> Result<Bytes, CacheError> {
        self.load(key, true).await
    }

    async fn get_local(&self, key: &str) -> Result<Bytes, CacheError> {
        self.load(key, false).await
    }

    fn set_peers(&self, peers: &[String]) {
        let view = PeerView {
            peers: peers.to_vec(),
            ring: HashRing::with_peers(peers),
        };
        *self.view.write() = view;
        info!("[CACHE] Peers set to [{}]", peers.join(", "));
    }

    fn set_self(&self, identity: &str) {
        *self.self_identity.write() = Some(identity.to_string());
    }

    fn set_origin(&self, url: &str) -> Result<(), CacheError> {
        self.origin.set_base(url)
    }

    fn peers(&self) -> Vec<String> {
        self.view.read().peers.clone()
    }
}
