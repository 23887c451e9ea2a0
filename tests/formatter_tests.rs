use chatbridge::gchat::build_payload;

/// Tests for the Google Chat payload formatting
/// These verify that the outbound text matches the bridge format exactly
/// and that the invite card is static configuration.

#[test]
fn test_text_format_exact() {
    let payload = build_payload("Alice", "hello");

    assert_eq!(
        payload.get("text").and_then(|t| t.as_str()),
        Some("Alice: hello"),
        "Outbound text must be exactly '<displayName>: <text>'"
    );
}

#[test]
fn test_text_preserves_message_content() {
    let payload = build_payload("Bob", "multi word message with : colons");

    assert_eq!(
        payload.get("text").and_then(|t| t.as_str()),
        Some("Bob: multi word message with : colons"),
        "Message text must be carried verbatim, colons included"
    );
}

#[test]
fn test_payload_carries_one_card() {
    let payload = build_payload("Alice", "hello");

    let cards = payload
        .get("cardsV2")
        .and_then(|c| c.as_array())
        .expect("Payload should carry a cardsV2 array");
    assert_eq!(cards.len(), 1, "Exactly one invite card is attached");

    let header = cards[0]
        .get("card")
        .and_then(|c| c.get("header"))
        .expect("Card should have a header");
    assert!(
        header
            .get("title")
            .and_then(|t| t.as_str())
            .unwrap_or_default()
            .contains("Slack"),
        "Card header should advertise the Slack workspace"
    );
}

#[test]
fn test_card_is_event_independent() {
    // The card is static configuration: two different events, same card
    let a = build_payload("Alice", "first message");
    let b = build_payload("Bob", "completely different text");

    assert_eq!(
        a.get("cardsV2"),
        b.get("cardsV2"),
        "The invite card must not vary with the event being bridged"
    );
}
