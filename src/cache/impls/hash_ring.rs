use crate::cache::structs::hash_ring::{
    HashRing,
    DEFAULT_REPLICAS
};
use sha1::{
    Digest,
    Sha1
};

impl HashRing {
    pub fn new(replicas: usize) -> HashRing {
        HashRing {
            replicas: replicas.max(1),
            ring: Default::default(),
        }
    }

    pub fn with_peers(peers: &[String]) -> HashRing {
        let mut ring = HashRing::new(DEFAULT_REPLICAS);
        ring.add(peers);
        ring
    }

    pub fn hash(data: &[u8]) -> u32 {
        let digest = Sha1::digest(data);
        u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }

    pub fn add(&mut self, peers: &[String]) {
        for peer in peers {
            for replica in 0..self.replicas {
                let point = Self::hash(format!("{replica}{peer}").as_bytes());
                self.ring.insert(point, peer.clone());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Peer owning `key`: the first ring point at or after the key's hash,
    /// wrapping around to the start.
    pub fn get(&self, key: &str) -> Option<&str> {
        let point = Self::hash(key.as_bytes());
        self.ring.range(point..)
            .next()
            .or_else(|| self.ring.iter().next())
            .map(|(_, peer)| peer.as_str())
    }
}
