use super::*;

fn welcome() -> Message {
    Message::new(MessageId::new("msg-1"), "Hi", Sender::Bot, Timestamp::from_millis(1_000))
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_state_is_closed_with_empty_draft() {
    let state = MessagingState::new(welcome());
    assert_eq!(state.visibility(), Visibility::Closed);
    assert!(!state.is_open());
    assert_eq!(state.draft(), "");
}

#[test]
fn new_state_is_seeded_with_welcome_only() {
    let state = MessagingState::new(welcome());
    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.messages()[0].sender(), Sender::Bot);
    assert_eq!(state.messages()[0].text(), "Hi");
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_default_is_closed() {
    assert_eq!(Visibility::default(), Visibility::Closed);
}

#[test]
fn toggle_open_follows_call_parity() {
    let mut state = MessagingState::new(welcome());
    for n in 1..=7 {
        let now = state.toggle_open();
        assert_eq!(now.is_open(), n % 2 == 1, "after {n} toggles");
        assert_eq!(state.is_open(), n % 2 == 1);
    }
}

#[test]
fn close_panel_reports_whether_it_was_open() {
    let mut state = MessagingState::new(welcome());
    state.toggle_open();
    assert!(state.close_panel());
    assert!(!state.is_open());
}

#[test]
fn close_panel_when_closed_leaves_state_unchanged() {
    let mut state = MessagingState::new(welcome());
    state.update_draft("pending");
    let before = state.clone();

    assert!(!state.close_panel());
    assert_eq!(state, before);
}

#[test]
fn closing_keeps_draft_and_messages() {
    let mut state = MessagingState::new(welcome());
    state.toggle_open();
    state.update_draft("half typed");
    state.close_panel();

    assert_eq!(state.draft(), "half typed");
    assert_eq!(state.messages().len(), 1);
}

// =============================================================
// Draft
// =============================================================

#[test]
fn update_draft_is_verbatim() {
    let mut state = MessagingState::new(welcome());
    state.update_draft("  spaced  \t");
    assert_eq!(state.draft(), "  spaced  \t");
}

#[test]
fn take_draft_rejects_whitespace_and_keeps_it() {
    let mut state = MessagingState::new(welcome());
    state.update_draft("   ");
    assert_eq!(state.take_draft(), None);
    assert_eq!(state.draft(), "   ");
}

#[test]
fn take_draft_rejects_empty() {
    let mut state = MessagingState::new(welcome());
    assert_eq!(state.take_draft(), None);
}

#[test]
fn take_draft_returns_untrimmed_text_and_clears() {
    let mut state = MessagingState::new(welcome());
    state.update_draft("  hello ");
    assert_eq!(state.take_draft().as_deref(), Some("  hello "));
    assert_eq!(state.draft(), "");
}

// =============================================================
// Log
// =============================================================

#[test]
fn append_preserves_creation_order() {
    let mut state = MessagingState::new(welcome());
    state.append(Message::new(MessageId::new("msg-2"), "A", Sender::User, Timestamp::from_millis(2_000)));
    state.append(Message::new(MessageId::new("msg-3"), "B", Sender::User, Timestamp::from_millis(2_000)));

    let texts: Vec<&str> = state.messages().iter().map(Message::text).collect();
    assert_eq!(texts, ["Hi", "A", "B"]);
}

#[test]
fn state_serializes_with_lowercase_tags() {
    let mut state = MessagingState::new(welcome());
    state.toggle_open();
    let json = serde_json::to_value(&state).expect("serialize");

    assert_eq!(json["visibility"], "open");
    assert_eq!(json["messages"][0]["sender"], "bot");
    assert_eq!(json["messages"][0]["id"], "msg-1");
    assert_eq!(json["messages"][0]["timestamp"], 1_000);

    let back: MessagingState = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, state);
}

// =============================================================
// Timestamp
// =============================================================

#[test]
fn timestamp_after_adds_millis() {
    let ts = Timestamp::from_millis(10);
    assert_eq!(ts.after(Duration::from_millis(500)).as_millis(), 510);
}

#[test]
fn timestamp_after_saturates() {
    let ts = Timestamp::from_millis(i64::MAX - 1);
    assert_eq!(ts.after(Duration::from_secs(10)).as_millis(), i64::MAX);
}
