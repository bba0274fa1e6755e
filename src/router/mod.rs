//! Per-request routing decision.
//!
//! A master with connected slaves hands every client request to a randomly
//! chosen slave; everything else is served by the node itself.

pub mod enums;
#[allow(clippy::module_inception)]
pub mod router;
