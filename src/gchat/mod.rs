//! Google Chat outbound side: payload formatting and webhook delivery

pub mod dispatcher;
pub mod formatter;

// Re-export main functions for convenience
pub use dispatcher::{deliver, webhook_for_channel};
pub use formatter::build_payload;
