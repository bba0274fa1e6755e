use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NodeConfig {
    pub bind_address: String,
    /// Origin base URL; set on the master only.
    pub mirror: String,
    /// Master base URL; set on slaves only.
    pub upstream: String,
    pub token: String,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub max_connections: u64,
    pub threads: u64,
}
