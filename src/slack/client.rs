//! Slack Web API client module
//!
//! Encapsulates the two per-event lookups: channel name and user display
//! name. Lookups are bearer-token authenticated and bounded by the shared
//! client timeout; there is no retry layer, a failed lookup fails once.

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::warn;

use crate::errors::BridgeError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to create HTTP client")
});

/// Slack Web API client holding the bot token.
pub struct SlackClient {
    token: String,
}

impl SlackClient {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Resolve a channel id to its name via `conversations.info`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Resolution`] if the request fails, the API
    /// answers `ok: false`, or the response carries no channel name. The
    /// caller is expected to drop the event rather than forward with a
    /// placeholder name.
    pub async fn get_channel_name(&self, channel_id: &str) -> Result<String, BridgeError> {
        let info_resp = HTTP_CLIENT
            .post("https://slack.com/api/conversations.info")
            .bearer_auth(&self.token)
            .json(&json!({ "channel": channel_id }))
            .send()
            .await
            .map_err(|e| BridgeError::Resolution(format!("Failed to get channel info: {e}")))?;

        if !info_resp.status().is_success() {
            return Err(BridgeError::Resolution(format!(
                "conversations.info returned HTTP {}",
                info_resp.status()
            )));
        }

        let info_data: Value = info_resp
            .json()
            .await
            .map_err(|e| BridgeError::Resolution(format!("Failed to parse channel info: {e}")))?;

        if !info_data.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            return Err(BridgeError::Resolution(format!(
                "conversations.info error: {}",
                info_data
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
            )));
        }

        info_data
            .get("channel")
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| BridgeError::Resolution("No channel name in response".to_string()))
    }

    /// Resolve a user id to a display name via `users.info`.
    ///
    /// Prefers the profile display name, then the real name. Never fails:
    /// identity is cosmetic, so any error falls back to the raw user id.
    pub async fn get_user_display_name(&self, user_id: &str) -> String {
        match self.fetch_user_name(user_id).await {
            Ok(name) => name,
            Err(e) => {
                warn!("Failed to fetch user info for {}: {}", user_id, e);
                user_id.to_string()
            }
        }
    }

    async fn fetch_user_name(&self, user_id: &str) -> Result<String, BridgeError> {
        let resp = HTTP_CLIENT
            .post("https://slack.com/api/users.info")
            .bearer_auth(&self.token)
            .json(&json!({ "user": user_id }))
            .send()
            .await?;

        let data: Value = resp.json().await?;

        if !data.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            return Err(BridgeError::Resolution(format!(
                "users.info error: {}",
                data.get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
            )));
        }

        let profile = data.get("user").and_then(|u| u.get("profile"));
        let name = profile
            .and_then(|p| p.get("display_name"))
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .or_else(|| {
                profile
                    .and_then(|p| p.get("real_name"))
                    .and_then(Value::as_str)
                    .filter(|n| !n.is_empty())
            })
            .unwrap_or(user_id);

        Ok(name.to_string())
    }
}
