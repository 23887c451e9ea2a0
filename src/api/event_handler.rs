//! Handler for Slack Events API callbacks.
//!
//! Processes `event_callback` payloads carrying a plain user `message`,
//! resolves the channel and user names, and forwards the message to the
//! Google Chat webhook mapped to the channel. Every path acknowledges with
//! 200; downstream failures never propagate back to Slack.

use serde_json::Value;
use tracing::{error, info, warn};

use super::helpers::ok_empty;
use crate::core::config::AppConfig;
use crate::core::models::{EventEnvelope, MessageEvent};
use crate::gchat;
use crate::slack::SlackClient;

/// Handle an `event_callback` envelope.
pub async fn handle_event_callback(config: &AppConfig, envelope: &EventEnvelope) -> Value {
    let Some(raw_event) = &envelope.event else {
        return ok_empty();
    };

    let event: MessageEvent = match serde_json::from_value(raw_event.clone()) {
        Ok(event) => event,
        Err(e) => {
            warn!("Unrecognized event shape: {}", e);
            return ok_empty();
        }
    };

    if !event.is_user_message() {
        return ok_empty();
    }

    if event.text.trim().is_empty() {
        info!(channel = %event.channel, "Skipping empty message");
        return ok_empty();
    }

    forward_message(config, &event).await;
    ok_empty()
}

/// Resolve names and deliver one message, best-effort.
async fn forward_message(config: &AppConfig, event: &MessageEvent) {
    let client = SlackClient::new(config.slack_bot_token.clone());

    // The two lookups are independent; issue them together.
    let (channel_result, user_name) = futures::join!(
        client.get_channel_name(&event.channel),
        client.get_user_display_name(&event.user),
    );

    // A wrong channel name would misroute the message to the wrong space,
    // so an unresolved channel drops the event rather than guessing.
    let channel_name = match channel_result {
        Ok(name) => name,
        Err(e) => {
            error!(channel = %event.channel, "Channel resolution failed, dropping message: {}", e);
            return;
        }
    };

    let Some(webhook_url) = gchat::webhook_for_channel(config, &channel_name) else {
        info!(channel = %channel_name, "Channel not bridged, dropping message");
        return;
    };

    info!(
        channel = %channel_name,
        user = %user_name,
        "Forwarding message to Google Chat"
    );

    let payload = gchat::build_payload(&user_name, &event.text);
    if let Err(e) = gchat::deliver(webhook_url, &payload).await {
        // At-most-once: log and move on, the 200 ack already stands.
        error!(channel = %channel_name, "Webhook delivery failed: {}", e);
    }
}
