use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Origin error: {0}")]
    Origin(String),

    #[error("Peer error: {0}")]
    Peer(String),

    #[error("HTTP error: {0}")]
    Http(String),
}
