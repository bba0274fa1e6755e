use crate::config::enums::cluster_encoding::ClusterEncoding;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ClusterConfig {
    pub control_path: String,
    pub encoding: ClusterEncoding,
    /// Seconds between reconnect attempts of a slave.
    pub reconnect_interval: u64,
    /// Milliseconds to wait after closing before the drain poll starts.
    pub drain_grace_period: u64,
    /// Milliseconds between two drain polls.
    pub drain_poll_interval: u64,
}
