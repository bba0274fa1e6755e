pub mod cache_adapter;
pub mod origin_fetcher;
