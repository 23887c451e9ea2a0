//! API Lambda handler - thin router that delegates to the event handler.
//!
//! This module handles:
//! - Request validation (headers, body, signature)
//! - The `url_verification` handshake
//! - Event callbacks (delegated to the `event_handler` module)

use super::{event_handler, helpers, parsing, signature};
use crate::core::config::AppConfig;
use crate::core::models::EventEnvelope;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

/// Lambda handler for the API entrypoint.
///
/// Verifies the Slack signature against the raw body, then routes the
/// payload. Well-formed requests only ever see 200 or 401; forwarding
/// failures are logged and still acknowledged so Slack keeps the event
/// subscription enabled.
#[tracing::instrument(level = "info", skip(event, config))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    config: &AppConfig,
) -> Result<Value, Error> {
    // ========================================================================
    // Extract and validate headers and raw body
    // ========================================================================

    let Some(headers) = event.payload.get("headers") else {
        error!("Request missing headers");
        return Ok(helpers::err_response(400, "Missing headers"));
    };

    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(response) => return Ok(response),
    };

    // ========================================================================
    // Verify Slack signature before touching the payload
    // ========================================================================

    if let Err(response) = verify_signature(body, headers, config) {
        return Ok(response);
    }

    info!("Slack signature verified successfully");

    // ========================================================================
    // Route the envelope
    // ========================================================================

    let envelope = match serde_json::from_str::<EventEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            // Signed but unparseable; ack so Slack does not retry forever.
            warn!("Failed to parse event envelope: {}", e);
            return Ok(helpers::ok_empty());
        }
    };

    match envelope.kind.as_str() {
        "url_verification" => {
            let challenge = envelope.challenge.as_deref().unwrap_or("");
            Ok(helpers::ok_challenge(challenge))
        }
        "event_callback" => Ok(event_handler::handle_event_callback(config, &envelope).await),
        other => {
            info!(envelope_type = %other, "Ignoring unhandled envelope type");
            Ok(helpers::ok_empty())
        }
    }
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    Ok(body_str)
}

fn verify_signature(body: &str, headers: &Value, config: &AppConfig) -> Result<(), Value> {
    let Some(sig) = parsing::get_header_value(headers, "X-Slack-Signature") else {
        error!("Missing X-Slack-Signature header");
        return Err(helpers::err_response(
            401,
            "Missing X-Slack-Signature header",
        ));
    };

    let Some(timestamp) = parsing::get_header_value(headers, "X-Slack-Request-Timestamp") else {
        error!("Missing X-Slack-Request-Timestamp header");
        return Err(helpers::err_response(
            401,
            "Missing X-Slack-Request-Timestamp header",
        ));
    };

    if !signature::verify_slack_signature(body, timestamp, sig, config) {
        error!("Slack signature verification failed");
        return Err(helpers::err_response(401, "Invalid Slack signature"));
    }

    Ok(())
}
