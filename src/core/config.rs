use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_signing_secret: String,
    pub slack_bot_token: String,
    pub gchat_general_webhook_url: String,
    pub gchat_announcements_webhook_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            slack_signing_secret: env::var("SLACK_SIGNING_SECRET")
                .map_err(|e| format!("SLACK_SIGNING_SECRET: {}", e))?,
            slack_bot_token: env::var("SLACK_BOT_TOKEN")
                .map_err(|e| format!("SLACK_BOT_TOKEN: {}", e))?,
            gchat_general_webhook_url: env::var("GOOGLE_CHAT_GENERAL_WEBHOOK_URL")
                .map_err(|e| format!("GOOGLE_CHAT_GENERAL_WEBHOOK_URL: {}", e))?,
            gchat_announcements_webhook_url: env::var("GOOGLE_CHAT_ANNOUNCEMENTS_WEBHOOK_URL")
                .map_err(|e| format!("GOOGLE_CHAT_ANNOUNCEMENTS_WEBHOOK_URL: {}", e))?,
        })
    }
}
