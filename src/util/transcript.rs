//! View models derived from the conversation store.
//!
//! Rendering reads these rows only; deriving them never mutates the store, so
//! the same state always yields the same list and transcript.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use crate::state::conversation::{Conversation, Sender};
use crate::state::store::ConversationStore;

/// One entry in the conversation list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatListItem {
    pub id: String,
    pub name: String,
    pub snippet: String,
    pub selected: bool,
}

/// One rendered message bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptRow {
    pub id: String,
    pub from_user: bool,
    pub text: String,
}

/// Rows for the conversation list, in creation order.
pub fn chat_list_items(store: &ConversationStore) -> Vec<ChatListItem> {
    let selected = store.selected_id();
    store
        .conversations()
        .iter()
        .map(|c| ChatListItem {
            id: c.id.clone(),
            name: c.name.clone(),
            snippet: c.last_message_snippet().to_owned(),
            selected: selected == Some(c.id.as_str()),
        })
        .collect()
}

/// Message bubbles for one conversation, in transcript order.
pub fn transcript_rows(conversation: &Conversation) -> Vec<TranscriptRow> {
    conversation
        .messages()
        .iter()
        .map(|m| TranscriptRow { id: m.id.clone(), from_user: m.sender == Sender::User, text: m.text.clone() })
        .collect()
}

/// Key that changes whenever the visible transcript changes: a different
/// conversation or a different message count. Drives auto-scroll.
pub fn scroll_key(store: &ConversationStore) -> Option<(String, usize)> {
    store
        .active_conversation()
        .map(|c| (c.id.clone(), c.messages().len()))
}
