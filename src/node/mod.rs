//! Node state shared by every component.
//!
//! [`structs::edge_node::EdgeNode`] is built once at startup and handed out
//! as an `Arc` to HTTP handlers, control connection actors, the slave client
//! and the background tasks.

pub mod impls;
pub mod structs;
