//! Master-side peer registry.
//!
//! Authoritative map from a slave's identity (`http://host:port`) to the
//! record of its live control connection. Written only on join and leave,
//! read on every redirect and broadcast.

pub mod enums;
pub mod impls;
pub mod structs;
