use crate::config::enums::cluster_mode::ClusterMode;

impl ClusterMode {
    pub fn is_master(&self) -> bool {
        matches!(self, ClusterMode::master)
    }
}
