//! WebSocket wire format: JSON objects tagged by a `type` field.
//!
//! Every datetime crossing the wire is an RFC 3339 UTC string and every
//! enum is a snake_case string; the wire never carries a non-primitive
//! scalar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A place returned by local search, as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_address: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<u32>,
}

/// A chat-socket message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Envelope {
    /// Client → server: a user utterance.
    Chat { content: String },
    /// Server → client: the assistant's answer for one utterance.
    Reply {
        intent: String,
        content: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        places: Vec<Place>,
    },
    /// Server → client: an out-of-band push (notify endpoint).
    Notice { content: String },
    /// Server → client: a message that was buffered while the session
    /// had no live connection, replayed on reconnect.
    Queued {
        queued_at: DateTime<Utc>,
        message: Box<Envelope>,
    },
    Ping,
    Pong,
    /// The session's TTL elapsed mid-connection; the socket closes next.
    SessionExpired,
    Error { code: String, message: String },
}

impl Envelope {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Envelope::Error {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Wire name of the variant, matching the serialized `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Envelope::Chat { .. } => "chat",
            Envelope::Reply { .. } => "reply",
            Envelope::Notice { .. } => "notice",
            Envelope::Queued { .. } => "queued",
            Envelope::Ping => "ping",
            Envelope::Pong => "pong",
            Envelope::SessionExpired => "session_expired",
            Envelope::Error { .. } => "error",
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
