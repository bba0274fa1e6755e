pub mod distributed_cache;
pub mod hash_ring;
pub mod http_origin;
pub mod peer_view;
