use std::collections::BTreeMap;

pub const DEFAULT_REPLICAS: usize = 50;

/// Consistent-hash ring of peer identities.
#[derive(Debug, Clone, Default)]
pub struct HashRing {
    pub replicas: usize,
    pub ring: BTreeMap<u32, String>,
}
