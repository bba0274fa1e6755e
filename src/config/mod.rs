//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the node configuration
//! from a TOML file, with command line flags layered on top.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level / log_file / log_console_interval**: Logging and console statistics
//! - **node**: Listen address, HTTP server tuning, mirror/upstream role and shared token
//! - **cluster**: Control channel path, frame encoding, reconnect and drain timings
//! - **cache**: Cache group name, local byte budget, peer endpoint and origin timeout
//!
//! # Roles
//!
//! A node is a **master** when `node.mirror` is set, and a **slave** when
//! `node.upstream` is set. Exactly one of the two must be present.
//!
//! # Example
//!
//! ```rust,ignore
//! use thumbnail_edge::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! let mode = config.cluster_mode()?;
//! ```

/// Configuration enumerations (cluster mode, frame encoding, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/validation.
pub mod impls;
