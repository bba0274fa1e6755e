use serde::{
    Deserialize,
    Serialize
};

/// Lifecycle of a node's drain state. Transitions only move forward.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DrainPhase {
    #[default]
    Open,
    Draining,
    Terminated,
}
