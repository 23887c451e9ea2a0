//! Inbound event models for the Slack Events API.
//!
//! Both types are transient: deserialized from one request body, consumed,
//! and dropped when the invocation returns.

use serde::Deserialize;
use serde_json::Value;

/// Top-level Events API envelope.
///
/// `event` is kept as a raw [`Value`] because non-message callbacks
/// (reactions, channel renames, ...) carry shapes we never look at; only
/// payloads that pass the message filter are parsed into [`MessageEvent`].
#[derive(Debug, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub challenge: Option<String>,
    pub event: Option<Value>,
}

/// A single `message` event inside an `event_callback` envelope.
#[derive(Debug, Deserialize)]
pub struct MessageEvent {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub text: String,
    pub subtype: Option<String>,
    pub bot_id: Option<String>,
}

impl MessageEvent {
    /// Whether this event is a plain user-authored message worth bridging.
    ///
    /// Subtyped messages (edits, joins, bot posts) and anything carrying a
    /// `bot_id` are excluded; forwarding our own bridged output back would
    /// loop.
    #[must_use]
    pub fn is_user_message(&self) -> bool {
        self.kind == "message" && self.subtype.is_none() && self.bot_id.is_none()
    }
}
