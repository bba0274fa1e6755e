use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::websocket::enums::control_error::ControlError;
use crate::websocket::enums::control_frame::ControlFrame;
use crate::websocket::enums::control_message::ControlMessage;

/// Encodes a control message. `LOGIN` and `LOGIN_ACK` always go out as JSON
/// so either side can read them before any encoding is agreed on; other
/// messages use `encoding`.
pub fn encode_message(encoding: &ClusterEncoding, message: &ControlMessage) -> Result<ControlFrame, ControlError> {
    let encoding = match message {
        ControlMessage::LOGIN { .. } | ControlMessage::LOGIN_ACK { .. } => &ClusterEncoding::json,
        _ => encoding,
    };
    match encoding {
        ClusterEncoding::json => encode_json(message).map(ControlFrame::Text),
        ClusterEncoding::msgpack => encode_msgpack(message).map(ControlFrame::Binary),
    }
}

/// Decodes a text frame (JSON).
pub fn decode_text(text: &str) -> Result<ControlMessage, ControlError> {
    serde_json::from_str(text)
        .map_err(|e| ControlError::Encoding(e.to_string()))
}

/// Decodes a binary frame (MessagePack).
pub fn decode_binary(data: &[u8]) -> Result<ControlMessage, ControlError> {
    rmp_serde::from_slice(data)
        .map_err(|e| ControlError::Encoding(e.to_string()))
}

fn encode_json(message: &ControlMessage) -> Result<String, ControlError> {
    serde_json::to_string(message)
        .map_err(|e| ControlError::Encoding(e.to_string()))
}

fn encode_msgpack(message: &ControlMessage) -> Result<Vec<u8>, ControlError> {
    rmp_serde::to_vec_named(message)
        .map_err(|e| ControlError::Encoding(e.to_string()))
}
