//! Drain controller for graceful shutdown.
//!
//! Every asset-serving request holds a [`structs::drain_guard::DrainGuard`]
//! while it runs. On the first termination signal the node closes its drain
//! state and waits until the active count reaches zero before the HTTP
//! server is stopped. A second signal while closed exits immediately.

pub mod enums;
pub mod impls;
pub mod signals;
pub mod structs;
