use crate::error::LinkError;
use serde::{Deserialize, Serialize};

/// Discriminant field shared by every message in both directions
pub const TYPE_FIELD: &str = "type";
/// Field carrying the ROM image of a `loadROM` message
pub const DATA_FIELD: &str = "data";

pub const TYPE_WASM_READY: &str = "wasmReady";
pub const TYPE_FOCUS: &str = "focus";
pub const TYPE_LOAD_ROM: &str = "loadROM";

// Host to runtime
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    #[serde(rename = "focus")]
    Focus,
    #[serde(rename = "loadROM")]
    LoadRom { data: Vec<u8> },
}

impl HostMessage {
    pub fn tag(&self) -> &'static str {
        match self {
            HostMessage::Focus => TYPE_FOCUS,
            HostMessage::LoadRom { .. } => TYPE_LOAD_ROM,
        }
    }
}

// Runtime to host
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuntimeMessage {
    #[serde(rename = "wasmReady")]
    WasmReady,
}

impl RuntimeMessage {
    pub fn tag(&self) -> &'static str {
        match self {
            RuntimeMessage::WasmReady => TYPE_WASM_READY,
        }
    }
}

/// Only messages from the document's own origin are accepted, in both directions
#[inline]
pub fn accepts_origin(event_origin: &str, own_origin: &str) -> bool {
    event_origin == own_origin
}

/// Only the discriminant of an inbound message.
///
/// Used by receivers that pull the payload out separately (binary buffers
/// don't go through serde on the web side).
#[derive(Debug, Deserialize)]
pub struct MessageTag {
    #[serde(rename = "type")]
    pub kind: String,
}

impl MessageTag {
    /// Builds the host message once the binary payload, if any, has been pulled out
    pub fn into_host_message(self, payload: Option<Vec<u8>>) -> Result<HostMessage, LinkError> {
        match self.kind.as_str() {
            TYPE_FOCUS => Ok(HostMessage::Focus),
            TYPE_LOAD_ROM => match payload {
                Some(data) => Ok(HostMessage::LoadRom { data }),
                None => Err(LinkError::MissingPayload(self.kind)),
            },
            _ => Err(LinkError::UnknownMessage(self.kind)),
        }
    }
}
