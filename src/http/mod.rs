//! HTTP front for clients, peers and slaves.
//!
//! # Endpoints
//!
//! - `GET /{key}` - asset request, redirected to a slave or served locally
//! - `GET /_cache/{group}/{key}` - peer fetch, served from this node only
//! - `GET /_ws/` - control channel upgrade (master only)
//!
//! Served responses carry a `Content-Type` guessed from the key's extension
//! and `Last-Modified` set to the time of the response. Cache failures are
//! answered with a 500 carrying the error text.

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;

/// Unit tests for HTTP functionality.
pub mod tests;
