//! Google Chat message payload construction.
//!
//! Pure functions only; nothing here performs I/O or reads configuration.

use serde_json::{Value, json};

/// Static card content advertising the Slack workspace. Deliberately not
/// derived from the event being bridged.
const CARD_TITLE: &str = "Join Pinewood Robotics on Slack to join the conversation!";
const CARD_SUBTITLE: &str = "This is a bridged message from Slack. You should join the \
     Slack workspace below for future access. This bridge is only temporary for now.";
const CARD_IMAGE_URL: &str = "https://mp-cdn.elgato.com/media/01a11cf1-c0b5-46f0-9def-1dbb8d39d3e2/Slack-thumbnail-optimized-7a3bded9-c41e-4bdf-8ba0-5367c7dc310d.jpeg";
const INVITE_BUTTON_TEXT: &str = "Accept your Slack invite";
const INVITE_URL: &str =
    "https://join.slack.com/t/pinewoodroboticsgroup/shared_invite/zt-3coxmq6ie-02eRfEGLq0uHFRNAhMpeZA";

/// Build the webhook payload for one bridged message.
///
/// The text is exactly `"<display name>: <text>"`, followed by the static
/// invite card.
#[must_use]
pub fn build_payload(display_name: &str, text: &str) -> Value {
    json!({
        "text": format!("{display_name}: {text}"),
        "cardsV2": [
            {
                "cardId": "slack-bridge-invite",
                "card": {
                    "header": {
                        "title": CARD_TITLE,
                        "subtitle": CARD_SUBTITLE,
                        "imageUrl": CARD_IMAGE_URL,
                        "imageType": "SQUARE"
                    },
                    "sections": [
                        {
                            "widgets": [
                                {
                                    "buttonList": {
                                        "buttons": [
                                            {
                                                "text": INVITE_BUTTON_TEXT,
                                                "onClick": {
                                                    "openLink": { "url": INVITE_URL }
                                                }
                                            }
                                        ]
                                    }
                                }
                            ]
                        }
                    ]
                }
            }
        ]
    })
}
