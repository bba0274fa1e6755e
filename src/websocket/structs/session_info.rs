/// What a slave learns from a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub self_identity: String,
    pub peers: Vec<String>,
    pub mirror: String,
}
