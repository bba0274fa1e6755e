/// An encoded control message, ready to be written as a WebSocket frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlFrame {
    Text(String),
    Binary(Vec<u8>),
}
