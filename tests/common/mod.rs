#![allow(dead_code)]
use actix_web::dev::ServerHandle;
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use parking_lot::RwLock;
use std::net::{
    SocketAddr,
    TcpListener
};
use std::sync::Arc;
use std::time::Duration;
use thumbnail_edge::cache::errors::CacheError;
use thumbnail_edge::cache::traits::cache_adapter::CacheAdapter;
use thumbnail_edge::config::enums::cluster_encoding::ClusterEncoding;
use thumbnail_edge::config::enums::cluster_mode::ClusterMode;
use thumbnail_edge::config::structs::configuration::Configuration;
use thumbnail_edge::http::http::http_service_listen;
use thumbnail_edge::node::structs::edge_node::EdgeNode;
use thumbnail_edge::websocket::encoding::encoder::{
    decode_binary,
    decode_text
};
use thumbnail_edge::websocket::enums::control_message::ControlMessage;
use thumbnail_edge::websocket::slave::client::ControlStream;
use tokio::sync::Notify;
use tokio_tungstenite::tungstenite::Message;

pub const TOKEN: &str = "1234567890ABCDEFG";
pub const MIRROR: &str = "http://mirror.local/";

/// In-memory cache adapter that answers every key with the same body.
pub struct FakeCache {
    pub body: Result<Bytes, CacheError>,
    pub gate: Option<Arc<Notify>>,
    pub peers: RwLock<Vec<String>>,
    pub self_identity: RwLock<Option<String>>,
    pub origin: RwLock<Option<String>>,
}

impl FakeCache {
    pub fn serving(body: &'static [u8]) -> Arc<FakeCache> {
        Arc::new(Self::with(Ok(Bytes::from_static(body)), None))
    }

    pub fn failing(error: CacheError) -> Arc<FakeCache> {
        Arc::new(Self::with(Err(error), None))
    }

    /// Holds every `get` until the gate is notified.
    pub fn gated(body: &'static [u8], gate: Arc<Notify>) -> Arc<FakeCache> {
        Arc::new(Self::with(Ok(Bytes::from_static(body)), Some(gate)))
    }

    fn with(body: Result<Bytes, CacheError>, gate: Option<Arc<Notify>>) -> FakeCache {
        FakeCache {
            body,
            gate,
            peers: Default::default(),
            self_identity: Default::default(),
            origin: Default::default(),
        }
    }
}

#[async_trait]
impl CacheAdapter for FakeCache {
    async fn get(&self, _key: &str) -> Result<Bytes, CacheError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.body.clone()
    }

    async fn get_local(&self, key: &str) -> Result<Bytes, CacheError> {
        self.get(key).await
    }

    fn set_peers(&self, peers: &[String]) {
        *self.peers.write() = peers.to_vec();
    }

    fn set_self(&self, identity: &str) {
        *self.self_identity.write() = Some(identity.to_string());
    }

    fn set_origin(&self, url: &str) -> Result<(), CacheError> {
        *self.origin.write() = Some(url.to_string());
        Ok(())
    }

    fn peers(&self) -> Vec<String> {
        self.peers.read().clone()
    }
}

pub fn create_test_config(mode: ClusterMode) -> Configuration {
    let mut config = Configuration::init();
    config.node.threads = 1;
    config.node.bind_address = String::from("127.0.0.1:0");
    config.cluster.reconnect_interval = 1;
    config.cluster.drain_grace_period = 10;
    config.cluster.drain_poll_interval = 5;
    match mode {
        ClusterMode::master => config.node.mirror = String::from(MIRROR),
        ClusterMode::slave => config.node.upstream = String::from("http://127.0.0.1:1"),
    }
    config
}

pub fn create_test_node(config: Configuration, mode: ClusterMode, cache: Arc<FakeCache>) -> Arc<EdgeNode> {
    Arc::new(EdgeNode::new(Arc::new(config), mode, cache))
}

pub struct TestMaster {
    pub node: Arc<EdgeNode>,
    pub addr: SocketAddr,
    pub handle: ServerHandle,
}

impl TestMaster {
    pub fn upstream(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Runs a master's HTTP service on a random local port.
pub async fn start_master(encoding: ClusterEncoding) -> TestMaster {
    start_master_on(encoding, TcpListener::bind("127.0.0.1:0").unwrap()).await
}

/// Runs a fresh master on `addr`, retrying while the previous listener on
/// that address is still being torn down.
pub async fn restart_master(encoding: ClusterEncoding, addr: SocketAddr) -> TestMaster {
    for _ in 0..200 {
        if let Ok(listener) = TcpListener::bind(addr) {
            return start_master_on(encoding, listener).await;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("unable to bind {addr} again");
}

async fn start_master_on(encoding: ClusterEncoding, listener: TcpListener) -> TestMaster {
    let mut config = create_test_config(ClusterMode::master);
    config.cluster.encoding = encoding;
    let node = create_test_node(config, ClusterMode::master, FakeCache::serving(b"thumbnail!!!"));

    let addr = listener.local_addr().unwrap();
    let (handle, server) = http_service_listen(listener, node.clone()).await.unwrap();
    tokio::spawn(server);

    TestMaster { node, addr, handle }
}

/// Slave node whose cache records what the control channel tells it.
pub fn create_slave(upstream: &str) -> (Arc<EdgeNode>, Arc<FakeCache>) {
    let mut config = create_test_config(ClusterMode::slave);
    config.node.upstream = upstream.to_string();
    let cache = FakeCache::serving(b"thumbnail!!!");
    (create_test_node(config, ClusterMode::slave, cache.clone()), cache)
}

/// Polls `condition` until it holds, panicking after two seconds.
pub async fn wait_until(what: &str, condition: impl FnMut() -> bool) {
    wait_for(what, Duration::from_secs(2), condition).await
}

/// Polls `condition` every 10 ms until it holds, panicking after `limit`.
pub async fn wait_for(what: &str, limit: Duration, mut condition: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {what}");
}

/// Next control message on a slave's stream, or `None` when nothing decodable
/// arrives within `limit`.
pub async fn next_message(stream: &mut ControlStream, limit: Duration) -> Option<ControlMessage> {
    let read = async {
        while let Some(Ok(message)) = stream.next().await {
            match message {
                Message::Text(text) => return decode_text(text.as_str()).ok(),
                Message::Binary(data) => return decode_binary(&data).ok(),
                _ => continue,
            }
        }
        None
    };
    tokio::time::timeout(limit, read).await.ok().flatten()
}

pub fn identity(port: u16) -> String {
    format!("http://127.0.0.1:{port}")
}
