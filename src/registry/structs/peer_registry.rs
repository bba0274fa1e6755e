use crate::registry::structs::slave_record::SlaveRecord;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct PeerRegistry {
    pub slaves: RwLock<BTreeMap<String, SlaveRecord>>,
}
