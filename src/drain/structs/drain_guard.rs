use crate::drain::structs::drain_state::DrainState;
use std::sync::Arc;

/// Keeps one operation counted as in-flight until dropped.
#[derive(Debug)]
pub struct DrainGuard {
    pub(crate) state: Arc<DrainState>,
}
