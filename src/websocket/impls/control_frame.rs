use crate::websocket::enums::control_frame::ControlFrame;
use tokio_tungstenite::tungstenite::Message;

impl From<ControlFrame> for Message {
    fn from(frame: ControlFrame) -> Self {
        match frame {
            ControlFrame::Text(text) => Message::text(text),
            ControlFrame::Binary(data) => Message::binary(data),
        }
    }
}
