//! Configuration enumerations.

/// Role of the node inside the fleet (master or slave).
pub mod cluster_mode;

/// Frame encoding used by the master for peer-list broadcasts.
pub mod cluster_encoding;

/// Errors raised while loading or validating the configuration.
pub mod configuration_error;
