use crate::cache::errors::CacheError;
use crate::cache::structs::peer_view::PeerView;
use crate::cache::traits::origin_fetcher::OriginFetcher;
use bytes::Bytes;
use parking_lot::{
    Mutex,
    RwLock
};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub type InflightCell = OnceCell<Result<Bytes, CacheError>>;

/// One shared load per (waits on a peer, key) pair.
pub type InflightLoads = HashMap<(bool, String), Arc<InflightCell>>;

pub struct DistributedCache {
    pub group: String,
    pub peer_path: String,
    pub cache_bytes: u64,
    pub origin: Arc<dyn OriginFetcher>,
    pub client: Client,
    pub self_identity: RwLock<Option<String>>,
    pub view: RwLock<PeerView>,
    pub local: RwLock<HashMap<String, Bytes>>,
    pub local_bytes: AtomicU64,
    pub inflight: Mutex<InflightLoads>,
}
