//! Event wire format between host and renderer.
//!
//! Every message crossing the bridge is a JSON object
//! `{"type": "<event-type>", "data": <json-value>}`. An absent `data`
//! field means an empty payload, not an error.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies an event channel. Equality and hashing are by the
/// underlying string, so a parsed inbound type and a well-known constant
/// address the same channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(Cow<'static, str>);

impl EventType {
    /// Sent to the renderer to trigger in-place navigation to a new
    /// topic. Payload is a path within the currently loaded bundle.
    pub const NAVIGATION: EventType = EventType(Cow::Borrowed("navigation"));

    /// Sent by the renderer after it navigated to a page. Payload is the
    /// full page URL.
    pub const DID_NAVIGATE: EventType = EventType(Cow::Borrowed("didNavigate"));

    /// Sent by the renderer when the user activated a link outside the
    /// documentation scheme. Payload is the requested URL.
    pub const OPEN_URL: EventType = EventType(Cow::Borrowed("openURL"));

    pub fn new(raw: impl Into<String>) -> Self {
        EventType(Cow::Owned(raw.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An inbound message as decoded off the transport.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl EventEnvelope {
    /// Decode a raw transport message.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// The payload bytes to fan out to subscribers: the re-encoded `data`
    /// value, or empty when `data` was absent.
    pub fn payload(&self) -> Vec<u8> {
        match &self.data {
            Some(value) => serde_json::to_vec(value).unwrap_or_default(),
            None => Vec::new(),
        }
    }
}

/// Encode an outbound event as the wire envelope.
pub fn encode_envelope<T: Serialize>(
    event_type: &EventType,
    data: &T,
) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct Outbound<'a, T> {
        #[serde(rename = "type")]
        event_type: &'a EventType,
        data: &'a T,
    }

    serde_json::to_string(&Outbound { event_type, data })
}
