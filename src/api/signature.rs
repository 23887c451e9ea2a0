use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::error;

use crate::core::config::AppConfig;

/// Maximum accepted age of a request timestamp, for replay protection.
const MAX_TIMESTAMP_AGE_SECS: u64 = 300;

/// Allowed forward clock skew between Slack and this host.
const MAX_TIMESTAMP_SKEW_SECS: u64 = 60;

/// Verify the `X-Slack-Signature` of a request against the raw body.
///
/// The signed base string is `v0:<timestamp>:<raw body>`; the body must be
/// the exact bytes Slack sent, never a reserialized form. Comparison happens
/// in constant time via [`Mac::verify_slice`].
pub fn verify_slack_signature(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    config: &AppConfig,
) -> bool {
    let signing_secret = &config.slack_signing_secret;

    let Ok(ts) = timestamp.parse::<u64>() else {
        error!("Unparseable request timestamp '{}'", timestamp);
        return false;
    };
    let Ok(now) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return false;
    };
    let now_secs = now.as_secs();
    if now_secs.saturating_sub(ts) > MAX_TIMESTAMP_AGE_SECS
        || ts > now_secs + MAX_TIMESTAMP_SKEW_SECS
    {
        error!("Timestamp out of range, potential replay attack");
        return false;
    }

    let Some(presented_hex) = signature.strip_prefix("v0=") else {
        error!("Signature missing v0= prefix");
        return false;
    };
    let Ok(presented) = hex::decode(presented_hex) else {
        error!("Signature is not valid hex");
        return false;
    };

    let base_string = format!("v0:{timestamp}:{request_body}");

    let mut mac = match Hmac::<Sha256>::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return false;
        }
    };
    mac.update(base_string.as_bytes());

    if mac.verify_slice(&presented).is_ok() {
        true
    } else {
        error!("Signature verification failed for timestamp '{}'", timestamp);
        false
    }
}

pub fn compute_signature(timestamp: &str, request_body: &str, signing_secret: &str) -> String {
    let base_string = format!("v0:{timestamp}:{request_body}");
    let mut mac = match Hmac::<Sha256>::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(base_string.as_bytes());
    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}
