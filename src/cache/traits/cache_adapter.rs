use crate::cache::errors::CacheError;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait CacheAdapter: Send + Sync {
    /// Returns the bytes for `key`, asking the owning peer when it is not
    /// this node.
    async fn get(&self, key: &str) -> Result<Bytes, CacheError>;

    /// Like [`CacheAdapter::get`] but never forwards to a peer. Serves
    /// requests that came from a peer.
    async fn get_local(&self, key: &str) -> Result<Bytes, CacheError>;

    /// Replaces the peer set in one step.
    fn set_peers(&self, peers: &[String]);

    fn set_self(&self, identity: &str);

    fn set_origin(&self, url: &str) -> Result<(), CacheError>;

    fn peers(&self) -> Vec<String>;
}
