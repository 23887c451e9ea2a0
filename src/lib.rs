/// ChatBridge - relays Slack channel messages into Google Chat spaces.
///
/// This crate implements a single API Lambda that receives Slack Events API
/// callbacks, verifies the request signature, and forwards user messages from
/// the bridged channels (#general and #announcements) to the matching Google
/// Chat incoming webhook.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution (one stateless invocation per event)
/// - reqwest for the Slack Web API lookups and the webhook POST
/// - Tokio for async runtime
///
/// Nothing outlives a single invocation: no queue, no cache, no storage.
/// Delivery is at-most-once by design; a failed forward is logged and the
/// event is still acknowledged so Slack does not disable the subscription.
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod gchat;
pub mod slack;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at binary start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
