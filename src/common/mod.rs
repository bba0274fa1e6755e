//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup (fern, colored levels, stdout or file)
//! - Constant-time token comparison
//! - Peer list joining/splitting for the control channel wire format

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
