//! Webhook routing and delivery.

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::core::config::AppConfig;
use crate::errors::BridgeError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to create HTTP client")
});

/// Map a resolved channel name to its destination webhook.
///
/// Only #general and #announcements are bridged; any other channel yields
/// `None` and the caller drops the message (intentional policy, not an
/// error).
#[must_use]
pub fn webhook_for_channel<'a>(config: &'a AppConfig, channel_name: &str) -> Option<&'a str> {
    match channel_name {
        "general" => Some(&config.gchat_general_webhook_url),
        "announcements" => Some(&config.gchat_announcements_webhook_url),
        _ => None,
    }
}

/// POST one payload to a Google Chat incoming webhook.
///
/// # Errors
///
/// Returns [`BridgeError::Delivery`] on a failed request or any non-2xx
/// response. The caller logs it; there is no retry.
pub async fn deliver(webhook_url: &str, payload: &Value) -> Result<(), BridgeError> {
    let response = HTTP_CLIENT
        .post(webhook_url)
        .json(payload)
        .send()
        .await
        .map_err(|e| BridgeError::Delivery(format!("Webhook request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(BridgeError::Delivery(format!(
            "Webhook returned {} - {}",
            status, body
        )));
    }

    Ok(())
}
