#[cfg(test)]
mod http_tests {
    use crate::cache::errors::CacheError;
    use crate::cache::traits::cache_adapter::CacheAdapter;
    use crate::config::enums::cluster_mode::ClusterMode;
    use crate::config::structs::configuration::Configuration;
    use crate::http::http::{
        http_service_cors,
        http_service_routes
    };
    use crate::node::structs::edge_node::EdgeNode;
    use crate::stats::enums::stats_event::StatsEvent;
    use actix_web::http::header::{
        CONTENT_TYPE,
        LAST_MODIFIED
    };
    use actix_web::http::StatusCode;
    use actix_web::{
        test,
        App
    };
    use async_trait::async_trait;
    use bytes::Bytes;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingCache {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CacheAdapter for RecordingCache {
        async fn get(&self, key: &str) -> Result<Bytes, CacheError> {
            self.calls.lock().push(format!("get {key}"));
            Ok(Bytes::from_static(b"thumbnail!!!"))
        }

        async fn get_local(&self, key: &str) -> Result<Bytes, CacheError> {
            self.calls.lock().push(format!("get_local {key}"));
            Ok(Bytes::from_static(b"peer"))
        }

        fn set_peers(&self, _peers: &[String]) {}

        fn set_self(&self, _identity: &str) {}

        fn set_origin(&self, _url: &str) -> Result<(), CacheError> {
            Ok(())
        }

        fn peers(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn node(mode: ClusterMode, cache: Arc<RecordingCache>) -> Arc<EdgeNode> {
        let mut config = Configuration::init();
        match mode {
            ClusterMode::master => config.node.mirror = String::from("http://mirror.local/"),
            ClusterMode::slave => config.node.upstream = String::from("http://master.local:5000"),
        }
        Arc::new(EdgeNode::new(Arc::new(config), mode, cache))
    }

    #[actix_web::test]
    async fn test_served_asset_headers() {
        let cache = Arc::new(RecordingCache::default());
        let node = node(ClusterMode::slave, cache.clone());
        let app = test::init_service(App::new().wrap(http_service_cors()).configure(http_service_routes(node.clone()))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/thumbs/cat.jpg").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "image/jpeg");
        assert!(resp.headers().contains_key(LAST_MODIFIED));
        assert_eq!(cache.calls.lock().as_slice(), ["get /thumbs/cat.jpg".to_string()]);
        assert_eq!(node.drain.active(), 0);
        assert_eq!(node.get_stats().served_local, 1);
    }

    #[actix_web::test]
    async fn test_unknown_extension_is_octet_stream() {
        let cache = Arc::new(RecordingCache::default());
        let app = test::init_service(App::new().configure(http_service_routes(node(ClusterMode::slave, cache)))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/blob").to_request()).await;

        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/octet-stream");
    }

    #[actix_web::test]
    async fn test_peer_route_never_forwards() {
        let cache = Arc::new(RecordingCache::default());
        let node = node(ClusterMode::slave, cache.clone());
        let app = test::init_service(App::new().configure(http_service_routes(node.clone()))).await;

        let req = test::TestRequest::get().uri("/_cache/thumbnail/thumbs/cat.jpg").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, Bytes::from_static(b"peer"));
        assert_eq!(cache.calls.lock().as_slice(), ["get_local /thumbs/cat.jpg".to_string()]);
        assert_eq!(node.get_stats().peer_fetches, 1);
    }

    #[actix_web::test]
    async fn test_control_path_only_on_master() {
        let cache = Arc::new(RecordingCache::default());
        let app = test::init_service(App::new().configure(http_service_routes(node(ClusterMode::slave, cache.clone())))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/_ws/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(cache.calls.lock().as_slice(), ["get /_ws/".to_string()]);
    }

    #[actix_web::test]
    async fn test_control_path_requires_upgrade_on_master() {
        let cache = Arc::new(RecordingCache::default());
        let app = test::init_service(App::new().configure(http_service_routes(node(ClusterMode::master, cache.clone())))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/_ws/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(cache.calls.lock().is_empty());
    }

    #[actix_web::test]
    async fn test_redirect_counted() {
        let cache = Arc::new(RecordingCache::default());
        let node = node(ClusterMode::master, cache.clone());
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        node.registry.add("http://10.0.0.2:5000", uuid::Uuid::new_v4(), tx);
        let app = test::init_service(App::new().configure(http_service_routes(node.clone()))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/cat.jpg").to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert!(cache.calls.lock().is_empty());
        assert_eq!(node.get_stats().redirects, 1);
        node.update_stats(StatsEvent::Redirects, -1);
        assert_eq!(node.get_stats().redirects, 0);
    }
}
