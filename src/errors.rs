use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Failed to parse Slack event: {0}")]
    Parse(String),

    #[error("Failed to resolve channel info: {0}")]
    Resolution(String),

    #[error("Failed to deliver webhook message: {0}")]
    Delivery(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for BridgeError {
    fn from(error: reqwest::Error) -> Self {
        BridgeError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(error: serde_json::Error) -> Self {
        BridgeError::Parse(error.to_string())
    }
}
