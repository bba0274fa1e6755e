use crate::cache::errors::CacheError;
use async_trait::async_trait;
use bytes::Bytes;

/// Source of truth for asset bytes, consulted on a cache miss.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OriginFetcher: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Bytes, CacheError>;

    fn set_base(&self, url: &str) -> Result<(), CacheError>;
}
