use crate::drain::enums::drain_phase::DrainPhase;
use crate::drain::structs::drain_guard::DrainGuard;
use crate::drain::structs::drain_state::DrainState;
use log::{
    debug,
    info,
    warn
};
use std::sync::Arc;
use std::time::Duration;

impl DrainState {
    pub fn new() -> Arc<DrainState> {
        Arc::new(DrainState::default())
    }

    /// Counts a new in-flight operation. Operations started after the state
    /// was closed are still counted, they just delay termination.
    pub fn begin(self: &Arc<Self>) -> DrainGuard {
        self.inner.lock().active += 1;
        DrainGuard { state: Arc::clone(self) }
    }

    pub fn end(&self) {
        let mut inner = self.inner.lock();
        match inner.active.checked_sub(1) {
            Some(active) => inner.active = active,
            None => warn!("[DRAIN] end() called with no active operations"),
        }
    }

    pub fn active(&self) -> u64 {
        self.inner.lock().active
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    pub fn phase(&self) -> DrainPhase {
        self.inner.lock().phase
    }

    /// Marks the state closed. Returns false when it already was.
    pub fn close(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.closed {
            return false;
        }
        inner.closed = true;
        inner.phase = DrainPhase::Draining;
        true
    }

    /// Closes the state, waits `grace`, then polls every `poll` until no
    /// operation is active.
    pub async fn shutdown(&self, grace: Duration, poll: Duration) {
        self.close();
        info!("[DRAIN] Draining, {} active operation(s)", self.active());
        tokio::time::sleep(grace).await;
        loop {
            let active = self.active();
            if active == 0 {
                break;
            }
            debug!("[DRAIN] Waiting for {active} operation(s)");
            tokio::time::sleep(poll).await;
        }
        self.inner.lock().phase = DrainPhase::Terminated;
        info!("[DRAIN] All operations finished");
    }
}

impl Drop for DrainGuard {
    fn drop(&mut self) {
        self.state.end();
    }
}
