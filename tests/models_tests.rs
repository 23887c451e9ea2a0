use chatbridge::core::models::{EventEnvelope, MessageEvent};

/// Tests for the inbound event models
/// These verify that the Slack Events API payload shapes deserialize
/// correctly and that the user-message filter behaves as intended.

#[test]
fn test_url_verification_envelope() {
    let body = r#"{"type":"url_verification","challenge":"abc123","token":"ignored"}"#;
    let envelope: EventEnvelope = serde_json::from_str(body).unwrap();

    assert_eq!(envelope.kind, "url_verification");
    assert_eq!(envelope.challenge.as_deref(), Some("abc123"));
    assert!(envelope.event.is_none());
}

#[test]
fn test_event_callback_envelope_with_message() {
    let body = r#"{
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel": "C12345",
            "user": "U12345",
            "text": "hello",
            "ts": "1609753200.000100"
        }
    }"#;
    let envelope: EventEnvelope = serde_json::from_str(body).unwrap();

    assert_eq!(envelope.kind, "event_callback");
    let event: MessageEvent = serde_json::from_value(envelope.event.unwrap()).unwrap();
    assert_eq!(event.channel, "C12345");
    assert_eq!(event.user, "U12345");
    assert_eq!(event.text, "hello");
    assert!(event.is_user_message(), "Plain user message should pass the filter");
}

#[test]
fn test_subtyped_message_filtered() {
    let event = MessageEvent {
        kind: "message".to_string(),
        channel: "C12345".to_string(),
        user: "U12345".to_string(),
        text: "edited text".to_string(),
        subtype: Some("message_changed".to_string()),
        bot_id: None,
    };

    assert!(
        !event.is_user_message(),
        "Subtyped messages (edits, joins) must not be bridged"
    );
}

#[test]
fn test_bot_message_filtered() {
    let event = MessageEvent {
        kind: "message".to_string(),
        channel: "C12345".to_string(),
        user: String::new(),
        text: "bot output".to_string(),
        subtype: None,
        bot_id: Some("B12345".to_string()),
    };

    assert!(
        !event.is_user_message(),
        "Bot-authored messages must not be bridged (loop guard)"
    );
}

#[test]
fn test_non_message_event_filtered() {
    let event = MessageEvent {
        kind: "reaction_added".to_string(),
        channel: "C12345".to_string(),
        user: "U12345".to_string(),
        text: String::new(),
        subtype: None,
        bot_id: None,
    };

    assert!(
        !event.is_user_message(),
        "Non-message events must not be bridged"
    );
}

#[test]
fn test_unknown_event_fields_tolerated() {
    // Slack adds fields freely; deserialization must not be strict
    let body = r#"{
        "type": "event_callback",
        "team_id": "T123",
        "api_app_id": "A123",
        "event_id": "Ev123",
        "event_time": 1609753200,
        "event": {
            "type": "message",
            "channel": "C12345",
            "user": "U12345",
            "text": "hi",
            "client_msg_id": "uuid",
            "blocks": [{"type": "rich_text"}]
        }
    }"#;
    let envelope: EventEnvelope = serde_json::from_str(body).unwrap();
    let event: MessageEvent = serde_json::from_value(envelope.event.unwrap()).unwrap();

    assert!(event.is_user_message());
    assert_eq!(event.text, "hi");
}
