use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::broadcast_report::BroadcastReport;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::registry::structs::slave_record::{
    ControlSender,
    SlaveRecord
};
use crate::websocket::enums::control_message::ControlMessage;
use log::{
    debug,
    warn
};
use rand::RngExt;
use std::sync::atomic::AtomicU64;
use std::time::Instant;
use uuid::Uuid;

impl SlaveRecord {
    pub fn new(identity: String, connection_id: Uuid, sender: ControlSender) -> SlaveRecord {
        SlaveRecord {
            identity,
            connection_id,
            sender,
            connected_at: Instant::now(),
            active_downloads: AtomicU64::new(0),
        }
    }
}

impl PeerRegistry {
    pub fn new() -> PeerRegistry {
        PeerRegistry::default()
    }

    /// Registers a slave, replacing any previous record under the same
    /// identity.
    pub fn add(&self, identity: &str, connection_id: Uuid, sender: ControlSender) {
        let record = SlaveRecord::new(identity.to_string(), connection_id, sender);
        if self.slaves.write().insert(identity.to_string(), record).is_some() {
            debug!("[REGISTRY] Replaced existing record for {identity}");
        }
    }

    pub fn remove(&self, identity: &str) -> bool {
        self.slaves.write().remove(identity).is_some()
    }

    /// Removes the record only while it still belongs to `connection_id`.
    /// A slave that reconnected under the same identity keeps its new record.
    pub fn release(&self, identity: &str, connection_id: Uuid) -> bool {
        let mut slaves = self.slaves.write();
        match slaves.get(identity) {
            Some(record) if record.connection_id == connection_id => {
                slaves.remove(identity);
                true
            }
            Some(_) => {
                debug!("[REGISTRY] Ignoring stale release for {identity}");
                false
            }
            None => false,
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.slaves.read().keys().cloned().collect()
    }

    pub fn peek_one(&self) -> Result<String, RegistryError> {
        let slaves = self.slaves.read();
        if slaves.is_empty() {
            return Err(RegistryError::EmptyFleet);
        }
        let index = rand::rng().random_range(0..slaves.len());
        slaves.keys().nth(index).cloned().ok_or(RegistryError::EmptyFleet)
    }

    pub fn len(&self) -> usize {
        self.slaves.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slaves.read().is_empty()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.slaves.read().contains_key(identity)
    }

    /// Queues `message` for every identity in `targets`. Unknown identities
    /// and closed channels are reported as failed; one failure never stops
    /// delivery to the rest.
    pub fn broadcast(&self, targets: &[String], message: &ControlMessage) -> BroadcastReport {
        let senders: Vec<(String, Option<ControlSender>)> = {
            let slaves = self.slaves.read();
            targets.iter()
                .map(|target| (target.clone(), slaves.get(target).map(|record| record.sender.clone())))
                .collect()
        };

        let mut report = BroadcastReport::default();
        for (target, sender) in senders {
            match sender.map(|sender| sender.send(message.clone())) {
                Some(Ok(())) => report.delivered += 1,
                Some(Err(_)) | None => {
                    warn!("[REGISTRY] Unable to queue message for {target}");
                    report.failed.push(target);
                }
            }
        }
        report
    }
}
