#[cfg(test)]
mod cache_tests {
    use crate::cache::errors::CacheError;
    use crate::cache::structs::distributed_cache::DistributedCache;
    use crate::cache::structs::hash_ring::HashRing;
    use crate::cache::structs::http_origin::HttpOrigin;
    use crate::cache::traits::cache_adapter::CacheAdapter;
    use crate::cache::traits::origin_fetcher::{
        MockOriginFetcher,
        OriginFetcher
    };
    use crate::config::structs::cache_config::CacheConfig;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::atomic::{
        AtomicUsize,
        Ordering
    };
    use std::sync::Arc;
    use std::time::Duration;

    struct CountingOrigin {
        calls: AtomicUsize,
        delay: Duration,
    }

    impl CountingOrigin {
        fn new(delay: Duration) -> Arc<CountingOrigin> {
            Arc::new(CountingOrigin { calls: AtomicUsize::new(0), delay })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OriginFetcher for CountingOrigin {
        async fn fetch(&self, key: &str) -> Result<Bytes, CacheError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(Bytes::from(format!("data:{key}")))
        }

        fn set_base(&self, _url: &str) -> Result<(), CacheError> {
            Ok(())
        }
    }

    fn cache_with(origin: Arc<dyn OriginFetcher>, cache_bytes: u64) -> DistributedCache {
        let mut config = CacheConfig::init();
        config.cache_bytes = cache_bytes;
        config.origin_timeout = 2;
        DistributedCache::new(&config, origin).unwrap()
    }

    mod hash_ring {
        use super::*;

        fn peers(names: &[&str]) -> Vec<String> {
            names.iter().map(|name| name.to_string()).collect()
        }

        #[test]
        fn test_empty_ring_has_no_owner() {
            let ring = HashRing::with_peers(&[]);
            assert!(ring.is_empty());
            assert_eq!(ring.get("/cat.jpg"), None);
        }

        #[test]
        fn test_replicas_per_peer() {
            let ring = HashRing::with_peers(&peers(&["http://a:1", "http://b:1"]));
            assert_eq!(ring.replicas, 50);
            assert!(ring.ring.len() <= 100);
            assert!(ring.ring.len() > 90);
        }

        #[test]
        fn test_lookup_is_deterministic() {
            let members = peers(&["http://a:1", "http://b:1", "http://c:1"]);
            let first = HashRing::with_peers(&members);
            let second = HashRing::with_peers(&members);
            for index in 0..200 {
                let key = format!("/thumb/{index}.jpg");
                assert_eq!(first.get(&key), second.get(&key));
            }
        }

        #[test]
        fn test_every_peer_owns_keys() {
            let ring = HashRing::with_peers(&peers(&["http://a:1", "http://b:1", "http://c:1"]));
            let mut owners = std::collections::HashSet::new();
            for index in 0..1000 {
                owners.insert(ring.get(&format!("/thumb/{index}.jpg")).unwrap().to_string());
            }
            assert_eq!(owners.len(), 3);
        }

        #[test]
        fn test_adding_peer_only_moves_keys_to_it() {
            let before = HashRing::with_peers(&peers(&["http://a:1", "http://b:1"]));
            let after = HashRing::with_peers(&peers(&["http://a:1", "http://b:1", "http://c:1"]));
            for index in 0..1000 {
                let key = format!("/thumb/{index}.jpg");
                let old = before.get(&key).unwrap();
                let new = after.get(&key).unwrap();
                assert!(old == new || new == "http://c:1");
            }
        }
    }

    mod distributed_cache {
        use super::*;

        #[tokio::test]
        async fn test_concurrent_gets_load_once() {
            let origin = CountingOrigin::new(Duration::from_millis(50));
            let cache = cache_with(origin.clone(), 1 << 20);

            let loads = (0..10).map(|_| cache.get("/cat.jpg"));
            let results = futures_util::future::join_all(loads).await;

            assert_eq!(origin.calls(), 1);
            for result in results {
                assert_eq!(result.unwrap(), Bytes::from("data:/cat.jpg"));
            }
            assert!(cache.inflight.lock().is_empty());
        }

        #[tokio::test]
        async fn test_owner_shares_load_between_client_and_peer() {
            let origin = CountingOrigin::new(Duration::from_millis(100));
            let cache = cache_with(origin.clone(), 1 << 20);
            cache.set_self("http://b:1");
            cache.set_peers(&["http://b:1".to_string()]);

            let (client, peer) = tokio::join!(cache.get("/cat.jpg"), cache.get_local("/cat.jpg"));

            assert_eq!(origin.calls(), 1);
            assert_eq!(client.unwrap(), peer.unwrap());
            assert!(cache.inflight.lock().is_empty());
        }

        #[tokio::test]
        async fn test_peer_bound_load_does_not_share_with_local_load() {
            let origin = CountingOrigin::new(Duration::from_millis(100));
            let cache = cache_with(origin.clone(), 1 << 20);
            cache.set_self("http://10.0.0.2:5000");
            cache.set_peers(&["http://127.0.0.1:1".to_string()]);

            let (client, peer) = tokio::join!(cache.get("/cat.jpg"), cache.get_local("/cat.jpg"));

            assert_eq!(origin.calls(), 2);
            assert!(client.is_ok());
            assert!(peer.is_ok());
        }

        #[tokio::test]
        async fn test_cancelled_load_clears_inflight() {
            let origin = CountingOrigin::new(Duration::from_secs(5));
            let cache = cache_with(origin.clone(), 1 << 20);

            let cancelled = tokio::time::timeout(Duration::from_millis(20), cache.get("/cat.jpg")).await;

            assert!(cancelled.is_err());
            assert_eq!(origin.calls(), 1);
            assert!(cache.inflight.lock().is_empty());
        }

        #[tokio::test]
        async fn test_owner_keeps_value_locally() {
            let origin = CountingOrigin::new(Duration::ZERO);
            let cache = cache_with(origin.clone(), 1 << 20);
            cache.set_self("http://10.0.0.2:5000");
            cache.set_peers(&["http://10.0.0.2:5000".to_string()]);

            cache.get("/cat.jpg").await.unwrap();
            cache.get("/cat.jpg").await.unwrap();

            assert_eq!(origin.calls(), 1);
            assert!(cache.local.read().contains_key("/cat.jpg"));
            assert_eq!(cache.local_bytes.load(Ordering::SeqCst), "data:/cat.jpg".len() as u64);
        }

        #[tokio::test]
        async fn test_unreachable_peer_falls_back_to_origin() {
            let origin = CountingOrigin::new(Duration::ZERO);
            let cache = cache_with(origin.clone(), 1 << 20);
            cache.set_self("http://10.0.0.2:5000");
            cache.set_peers(&["http://127.0.0.1:1".to_string()]);

            assert_eq!(cache.owner("/cat.jpg").as_deref(), Some("http://127.0.0.1:1"));
            let value = cache.get("/cat.jpg").await.unwrap();

            assert_eq!(value, Bytes::from("data:/cat.jpg"));
            assert_eq!(origin.calls(), 1);
            assert!(!cache.local.read().contains_key("/cat.jpg"));
        }

        #[tokio::test]
        async fn test_get_local_never_forwards() {
            let origin = CountingOrigin::new(Duration::ZERO);
            let cache = cache_with(origin.clone(), 1 << 20);
            cache.set_peers(&["http://127.0.0.1:1".to_string()]);

            cache.get_local("/cat.jpg").await.unwrap();

            assert_eq!(origin.calls(), 1);
            assert!(cache.local.read().contains_key("/cat.jpg"));
        }

        #[tokio::test]
        async fn test_full_cache_serves_without_keeping() {
            let origin = CountingOrigin::new(Duration::ZERO);
            let cache = cache_with(origin.clone(), 4);

            let value = cache.get("/cat.jpg").await.unwrap();

            assert_eq!(value.len(), "data:/cat.jpg".len());
            assert!(!cache.local.read().contains_key("/cat.jpg"));
            assert_eq!(cache.local_bytes.load(Ordering::SeqCst), 0);
        }

        #[tokio::test]
        async fn test_origin_errors_are_not_cached() {
            let mut origin = MockOriginFetcher::new();
            origin.expect_fetch()
                .times(2)
                .returning(|key| Err(CacheError::Origin(format!("{key} returned 404 Not Found"))));
            let cache = cache_with(Arc::new(origin), 1 << 20);

            for _ in 0..2 {
                let error = cache.get("/missing.jpg").await.unwrap_err();
                assert_eq!(error, CacheError::Origin("/missing.jpg returned 404 Not Found".to_string()));
            }
        }

        #[test]
        fn test_set_origin_delegates_to_fetcher() {
            let mut origin = MockOriginFetcher::new();
            origin.expect_set_base()
                .withf(|url| url == "http://mirror.local/")
                .times(1)
                .returning(|_| Ok(()));
            let cache = cache_with(Arc::new(origin), 1 << 20);
            assert!(cache.set_origin("http://mirror.local/").is_ok());
        }

        #[test]
        fn test_peer_url_layout() {
            let cache = cache_with(CountingOrigin::new(Duration::ZERO), 1 << 20);
            assert_eq!(
                cache.peer_url("http://10.0.0.3:5000", "/thumbs/cat.jpg"),
                "http://10.0.0.3:5000/_cache/thumbnail/thumbs/cat.jpg"
            );
        }

        #[test]
        fn test_set_peers_replaces_view() {
            let cache = cache_with(CountingOrigin::new(Duration::ZERO), 1 << 20);
            cache.set_peers(&["http://a:1".to_string(), "http://b:1".to_string()]);
            cache.set_peers(&["http://c:1".to_string()]);
            assert_eq!(cache.peers(), vec!["http://c:1".to_string()]);
            assert_eq!(cache.owner("/cat.jpg").as_deref(), Some("http://c:1"));
        }
    }

    mod http_origin {
        use super::*;

        #[test]
        fn test_key_replaces_base_path() {
            let origin = HttpOrigin::new(Duration::from_secs(1)).unwrap();
            origin.set_base("http://mirror.local/base/").unwrap();
            assert_eq!(origin.url_for("/cat.jpg").unwrap().as_str(), "http://mirror.local/cat.jpg");
        }

        #[test]
        fn test_missing_base_is_origin_error() {
            let origin = HttpOrigin::new(Duration::from_secs(1)).unwrap();
            assert!(matches!(origin.url_for("/cat.jpg"), Err(CacheError::Origin(_))));
        }

        #[test]
        fn test_invalid_base_rejected() {
            let origin = HttpOrigin::new(Duration::from_secs(1)).unwrap();
            assert!(origin.set_base("not a url").is_err());
        }
    }
}
