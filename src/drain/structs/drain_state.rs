use crate::drain::enums::drain_phase::DrainPhase;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct DrainInner {
    pub active: u64,
    pub closed: bool,
    pub phase: DrainPhase,
}

#[derive(Debug, Default)]
pub struct DrainState {
    pub inner: Mutex<DrainInner>,
}
