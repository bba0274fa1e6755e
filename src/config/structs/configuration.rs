use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::cluster_config::ClusterConfig;
use crate::config::structs::node_config::NodeConfig;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub log_file: String,
    pub log_console_interval: u64,
    pub node: NodeConfig,
    pub cluster: ClusterConfig,
    pub cache: CacheConfig,
}
