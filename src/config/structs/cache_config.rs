use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub group: String,
    /// Upper bound of bytes kept locally; values beyond it are served but not kept.
    pub cache_bytes: u64,
    pub peer_path: String,
    /// Seconds before an origin or peer fetch is abandoned.
    pub origin_timeout: u64,
}
