use serde::{
    Deserialize,
    Serialize
};

/// Message exchanged on the control channel, tagged by its `action` field.
///
/// Peer lists travel comma-joined. `LOGIN.port` is a JSON number
/// (`{"action":"LOGIN","token":"…","port":5000}`), not a quoted string, so
/// slaves that send the port as a string are rejected at decode time.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action")]
pub enum ControlMessage {
    LOGIN {
        token: String,
        port: u16,
    },
    LOGIN_ACK {
        #[serde(rename = "self", default)]
        self_identity: String,
        #[serde(default)]
        peers: String,
        #[serde(default)]
        mirror: String,
    },
    PEER_UPDATE {
        #[serde(default)]
        peers: String,
    },
    /// Any action this node does not know about.
    #[serde(other)]
    UNKNOWN,
}
