use super::*;
use crate::state::conversation::{GREETING_TEXT, Sender};

fn seeded() -> (ConversationStore, String) {
    let store = ConversationStore::default();
    let id = store.selected_id().unwrap().to_owned();
    (store, id)
}

// =============================================================
// Seeding and selection
// =============================================================

#[test]
fn default_store_has_one_selected_greeting_conversation() {
    let (store, id) = seeded();
    assert_eq!(store.conversations().len(), 1);
    let conv = store.active_conversation().unwrap();
    assert_eq!(conv.id, id);
    assert_eq!(conv.name, "New Chat 1");
    assert_eq!(conv.messages().len(), 1);
    assert_eq!(conv.messages()[0].text, GREETING_TEXT);
}

#[test]
fn select_conversation_switches_active() {
    let (mut store, first) = seeded();
    let second = store.create_conversation(None);
    assert_eq!(store.selected_id(), Some(second.as_str()));
    assert!(store.select_conversation(&first));
    assert_eq!(store.selected_id(), Some(first.as_str()));
}

#[test]
fn select_unknown_conversation_is_noop() {
    let (mut store, first) = seeded();
    assert!(!store.select_conversation("missing"));
    assert_eq!(store.selected_id(), Some(first.as_str()));
}

// =============================================================
// Creation
// =============================================================

#[test]
fn create_conversation_seeds_greeting_and_selects_it() {
    let (mut store, _) = seeded();
    let id = store.create_conversation(None);
    let conv = store.conversation(&id).unwrap();
    assert_eq!(conv.messages().len(), 1);
    assert_eq!(conv.messages()[0].sender, Sender::Bot);
    assert_eq!(store.selected_id(), Some(id.as_str()));
}

#[test]
fn create_conversation_placeholder_counts_conversations() {
    let (mut store, _) = seeded();
    let second = store.create_conversation(None);
    let third = store.create_conversation(None);
    assert_eq!(store.conversation(&second).unwrap().name, "New Chat 2");
    assert_eq!(store.conversation(&third).unwrap().name, "New Chat 3");
}

#[test]
fn create_conversation_uses_given_name() {
    let (mut store, _) = seeded();
    let id = store.create_conversation(Some("Pricing".to_owned()));
    assert_eq!(store.conversation(&id).unwrap().name, "Pricing");
}

#[test]
fn conversation_ids_unique_within_store() {
    let (mut store, _) = seeded();
    for _ in 0..5 {
        store.create_conversation(None);
    }
    let mut ids: Vec<&str> = store.conversations().iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_blank_text_changes_nothing() {
    let (mut store, id) = seeded();
    let before = store.clone();
    assert!(store.begin_send(&id, "").is_none());
    assert!(store.begin_send(&id, "   \n\t").is_none());
    assert_eq!(store, before);
}

#[test]
fn begin_send_unknown_conversation_changes_nothing() {
    let (mut store, _) = seeded();
    let before = store.clone();
    assert!(store.begin_send("missing", "hello").is_none());
    assert_eq!(store, before);
}

#[test]
fn begin_send_appends_user_message_and_sets_loading() {
    let (mut store, id) = seeded();
    let pending = store.begin_send(&id, "hello").unwrap();
    assert_eq!(pending.conversation_id, id);
    assert_eq!(pending.question, "hello");

    let conv = store.conversation(&id).unwrap();
    assert_eq!(conv.messages().len(), 2);
    assert_eq!(conv.messages()[1].sender, Sender::User);
    assert_eq!(conv.messages()[1].text, "hello");
    assert_eq!(conv.last_message_snippet(), "hello");
    assert!(conv.is_loading);
}

#[test]
fn begin_send_requests_title_only_for_first_question() {
    let (mut store, id) = seeded();
    let first = store.begin_send(&id, "hello").unwrap();
    assert_eq!(first.title_seed.as_deref(), Some("hello"));

    let second = store.begin_send(&id, "again").unwrap();
    assert_eq!(second.title_seed, None);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_answer_success_appends_bot_reply_and_clears_loading() {
    let (mut store, id) = seeded();
    store.begin_send(&id, "hello");
    store.apply(StoreUpdate::Answer { conversation_id: id.clone(), result: Ok("hi there".to_owned()) });

    let conv = store.conversation(&id).unwrap();
    assert_eq!(conv.messages().len(), 3);
    assert_eq!(conv.messages()[2].sender, Sender::Bot);
    assert_eq!(conv.messages()[2].text, "hi there");
    assert_eq!(conv.last_message_snippet(), "hi there");
    assert!(!conv.is_loading);
}

#[test]
fn apply_answer_failure_appends_fallback_reply() {
    let (mut store, id) = seeded();
    store.begin_send(&id, "hello");
    store.apply(StoreUpdate::Answer {
        conversation_id: id.clone(),
        result: Err(ApiError::Transport("connection refused".to_owned())),
    });

    let conv = store.conversation(&id).unwrap();
    assert_eq!(conv.messages().len(), 3);
    assert_eq!(conv.messages()[2].text, FALLBACK_REPLY_TEXT);
    assert_eq!(conv.last_message_snippet(), FALLBACK_REPLY_TEXT);
    assert!(!conv.is_loading);
}

#[test]
fn apply_title_success_renames_conversation() {
    let (mut store, id) = seeded();
    store.apply(StoreUpdate::Title { conversation_id: id.clone(), result: Ok(" Greetings ".to_owned()) });
    assert_eq!(store.conversation(&id).unwrap().name, "Greetings");
}

#[test]
fn apply_title_failure_or_blank_keeps_placeholder() {
    let (mut store, id) = seeded();
    store.apply(StoreUpdate::Title { conversation_id: id.clone(), result: Err(ApiError::Status { status: 502 }) });
    store.apply(StoreUpdate::Title { conversation_id: id.clone(), result: Ok("  ".to_owned()) });
    assert_eq!(store.conversation(&id).unwrap().name, "New Chat 1");
}

#[test]
fn apply_targets_captured_conversation_not_selection() {
    let (mut store, first) = seeded();
    store.begin_send(&first, "hello");
    let second = store.create_conversation(None);
    assert_eq!(store.selected_id(), Some(second.as_str()));

    store.apply(StoreUpdate::Answer { conversation_id: first.clone(), result: Ok("late".to_owned()) });

    assert_eq!(store.conversation(&first).unwrap().messages().len(), 3);
    assert_eq!(store.conversation(&second).unwrap().messages().len(), 1);
}

#[test]
fn apply_for_unknown_conversation_is_ignored() {
    let (mut store, _) = seeded();
    let before = store.clone();
    store.apply(StoreUpdate::Answer { conversation_id: "missing".to_owned(), result: Ok("x".to_owned()) });
    store.apply(StoreUpdate::Title { conversation_id: "missing".to_owned(), result: Ok("x".to_owned()) });
    assert_eq!(store, before);
}

#[test]
fn overlapping_sends_land_in_completion_order() {
    let (mut store, id) = seeded();
    store.begin_send(&id, "first");
    store.begin_send(&id, "second");
    store.apply(StoreUpdate::Answer { conversation_id: id.clone(), result: Ok("reply to second".to_owned()) });
    store.apply(StoreUpdate::Answer { conversation_id: id.clone(), result: Ok("reply to first".to_owned()) });

    let texts: Vec<&str> = store.conversation(&id).unwrap().messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec![GREETING_TEXT, "first", "second", "reply to second", "reply to first"]);
}
