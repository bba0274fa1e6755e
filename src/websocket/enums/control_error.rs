use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControlError {
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("connection to master lost: {0}")]
    ConnectionLost(String),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("invalid control url: {0}")]
    Url(String),
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}
