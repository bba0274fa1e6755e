//! Implementation blocks for configuration structures.

pub mod cluster_mode;
pub mod configuration;
