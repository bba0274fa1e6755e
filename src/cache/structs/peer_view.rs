use crate::cache::structs::hash_ring::HashRing;

/// Peer list and the ring built from it, swapped together.
#[derive(Debug, Clone, Default)]
pub struct PeerView {
    pub peers: Vec<String>,
    pub ring: HashRing,
}
