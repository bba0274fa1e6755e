//! # Thumbnail Edge
//!
//! Edge cache front for large binary assets such as thumbnails, organized as
//! one master node and a dynamic fleet of slave (edge) nodes.
//!
//! ## Overview
//!
//! The master knows the mirror web server and accepts control connections
//! from slaves. Each slave logs in over a WebSocket, receives its identity,
//! the mirror URL and the current peer list, and from then on gets pushed a
//! new peer list whenever the fleet changes. Client requests that reach the
//! master are redirected to a random slave; slaves (and a master without
//! slaves) serve the bytes from a distributed cache sharded across the
//! fleet, falling back to the mirror.
//!
//! ## Features
//!
//! - **Membership**: token-protected login, join/leave broadcast to every slave
//! - **Routing**: 302 redirect from master to a random live slave
//! - **Caching**: consistent-hash sharding with one in-flight load per key
//! - **Graceful shutdown**: in-flight downloads finish before the server stops
//! - **Monitoring**: periodic statistics in the console log
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use thumbnail_edge::config::structs::configuration::Configuration;
//! use thumbnail_edge::node::structs::edge_node::EdgeNode;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let mode = config.validate()?;
//! let node = EdgeNode::bootstrap(Arc::new(config), mode)?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Cache adapter, distributed cache and mirror origin
//! - [`common`] - Logging setup and small shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`drain`] - In-flight tracking and signal-driven shutdown
//! - [`http`] - Client, peer and control HTTP endpoints
//! - [`node`] - Shared node state
//! - [`registry`] - Master-side map of connected slaves
//! - [`router`] - Redirect-or-serve decision
//! - [`stats`] - Real-time statistics
//! - [`structs`] - CLI argument parsing
//! - [`websocket`] - Cluster control channel

/// Distributed content cache behind the `CacheAdapter` trait.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Logging setup, constant-time token comparison and peer list helpers.
pub mod common;

/// Configuration management module.
///
/// Loads the TOML configuration file, applies CLI overrides and validates
/// the node's role before anything starts.
pub mod config;

/// Drain controller and termination signal handling.
pub mod drain;

/// HTTP service: asset, peer and control endpoints.
pub mod http;

/// Shared node state.
pub mod node;

/// Peer registry kept by the master.
pub mod registry;

/// Per-request routing decision.
pub mod router;

/// Statistics tracking and monitoring module.
///
/// Counts control channel activity, broadcasts, redirects and served
/// assets; logged periodically by a console task.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// WebSocket-based cluster control channel.
///
/// Login handshake, identity assignment and peer list broadcast between the
/// master and its slaves.
pub mod websocket;
