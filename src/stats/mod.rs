//! Real-time statistics tracking.
//!
//! Atomic counters for cluster and request activity, updated from actix
//! workers, control connection actors and the slave client without locking.
//! A console task logs a snapshot every `log_console_interval` seconds.
//!
//! # Example
//!
//! ```rust,ignore
//! use thumbnail_edge::stats::enums::stats_event::StatsEvent;
//!
//! node.update_stats(StatsEvent::Redirects, 1);
//! let stats = node.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
