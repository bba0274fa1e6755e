use crate::cache::errors::CacheError;
use crate::cache::structs::http_origin::HttpOrigin;
use crate::cache::traits::origin_fetcher::OriginFetcher;
use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use reqwest::{
    Client,
    Url
};
use std::time::Duration;

impl HttpOrigin {
    pub fn new(timeout: Duration) -> Result<HttpOrigin, CacheError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CacheError::Http(e.to_string()))?;
        Ok(HttpOrigin {
            client,
            base: Default::default(),
        })
    }

    /// Base URL with its path replaced by `key`.
    pub fn url_for(&self, key: &str) -> Result<Url, CacheError> {
        let mut url = self.base.read().clone()
            .ok_or_else(|| CacheError::Origin(String::from("no mirror configured")))?;
        url.set_path(key);
        Ok(url)
    }
}

#[async_trait]
impl OriginFetcher for HttpOrigin {
    async fn fetch(&self, key: &str) -> Result<Bytes, CacheError> {
        let url = self.url_for(key)?;
        debug!("[CACHE] Fetching {url} from origin");
        let response = self.client.get(url.clone())
            .send()
            .await
            .map_err(|e| CacheError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::Origin(format!("{url} returned {status}")));
        }
        response.bytes().await.map_err(|e| CacheError::Http(e.to_string()))
    }

    fn set_base(&self, url: &str) -> Result<(), CacheError> {
        let parsed = Url::parse(url).map_err(|e| CacheError::Origin(format!("invalid mirror {url}: {e}")))?;
        *self.base.write() = Some(parsed);
        Ok(())
    }
}
