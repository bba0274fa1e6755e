//! Cluster control channel.
//!
//! Every slave keeps one WebSocket open to the master's control path. The
//! master uses it to hand out identities and to push the current peer list
//! whenever a slave joins or leaves.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────┐
//!                    │  Master │  (mirror)
//!                    └────┬────┘
//!             ┌───────────┼───────────┐
//!             ▼           ▼           ▼
//!        ┌────────┐  ┌────────┐  ┌────────┐
//!        │ Slave  │◄─┤ Slave  ├─►│ Slave  │
//!        │   1    │  │   2    │  │   3    │
//!        └────────┘  └────────┘  └────────┘
//! ```
//!
//! # Protocol
//!
//! - `LOGIN {token, port}`: first frame a slave sends, always JSON.
//! - `LOGIN_ACK {self, peers, mirror}`: master reply, always JSON.
//! - `PEER_UPDATE {peers}`: pushed on membership change, JSON or
//!   MessagePack depending on `cluster.encoding`.
//!
//! Text frames carry JSON and binary frames carry MessagePack, so a receiver
//! never needs to know the sender's configured encoding.

/// Control messages, frames and errors.
pub mod enums;

/// Control connection and session structures.
pub mod structs;

/// Actor and broadcast implementations.
pub mod impls;

/// Frame encoding/decoding (JSON, MessagePack).
pub mod encoding;

/// Master side: control endpoint handler.
pub mod master;

/// Slave side: control client and reconnect loop.
pub mod slave;
