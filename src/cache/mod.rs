//! Distributed content cache.
//!
//! Request handlers only see the [`traits::cache_adapter::CacheAdapter`]
//! contract: `get(key)` returns the asset bytes, `set_peers` reconfigures
//! the peer set. The bundled [`structs::distributed_cache::DistributedCache`]
//! shards keys across peers with a consistent-hash ring, deduplicates
//! concurrent loads of the same key, and falls back to the mirror origin.
//!
//! # Architecture
//!
//! ```text
//! get(key) ─► local map ─► in-flight load ─► owner peer? ── yes ─► GET <peer>/_cache/<group>/<key>
//!                                                 │                        │ (failure)
//!                                                 no ◄─────────────────────┘
//!                                                 ▼
//!                                          origin (mirror)
//! ```
//!
//! Values are only kept by the node that owns the key. There is no eviction:
//! once `cache_bytes` is reached new values are served but not kept.

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for the cache, ring and origin.
pub mod impls;

/// Data structures for the cache, ring and origin.
pub mod structs;

/// Cache adapter and origin fetcher traits.
pub mod traits;

/// Unit tests for the cache layer.
pub mod tests;
