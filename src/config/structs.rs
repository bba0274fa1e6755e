//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// `[node]` section: listen address, HTTP tuning, role and token.
pub mod node_config;

/// `[cluster]` section: control channel and drain settings.
pub mod cluster_config;

/// `[cache]` section: distributed cache settings.
pub mod cache_config;
