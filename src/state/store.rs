//! Conversation store owned by the root component.
//!
//! DESIGN
//! ======
//! The store lives inside a single `RwSignal` provided via context, so every
//! mutation below runs inside one signal update on the UI thread. Async
//! results come back as [`StoreUpdate`] values that name their target
//! conversation explicitly; they never consult the current selection.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::conversation::{Conversation, FALLBACK_REPLY_TEXT, Message};
use crate::net::api::ApiError;

/// All conversations plus the active selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    selected_id: Option<String>,
}

impl Default for ConversationStore {
    /// One seeded conversation, selected.
    fn default() -> Self {
        let mut store = Self { conversations: Vec::new(), selected_id: None };
        store.create_conversation(None);
        store
    }
}

/// Work left to do after a user message was accepted by [`ConversationStore::begin_send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    /// Conversation the replies belong to, captured at send time.
    pub conversation_id: String,
    /// Payload for the question-answering request.
    pub question: String,
    /// Payload for the title request; only set on the first user message.
    pub title_seed: Option<String>,
}

/// Outcome of an outbound request, folded back into the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreUpdate {
    /// Title-generation finished.
    Title { conversation_id: String, result: Result<String, ApiError> },
    /// Question-answering finished.
    Answer { conversation_id: String, result: Result<String, ApiError> },
}

impl ConversationStore {
    /// Conversations in creation order.
    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    #[must_use]
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// The currently selected conversation, if any.
    #[must_use]
    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.selected_id.as_deref().and_then(|id| self.conversation(id))
    }

    fn conversation_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    /// Make `id` the active conversation. Unknown ids are ignored.
    ///
    /// Returns `true` if the selection changed to `id`.
    pub fn select_conversation(&mut self, id: &str) -> bool {
        if self.conversation(id).is_none() {
            return false;
        }
        self.selected_id = Some(id.to_owned());
        true
    }

    /// Append a new greeting-seeded conversation and select it.
    ///
    /// Without a name the placeholder `"New Chat {n}"` is used, where `n` is
    /// the conversation count including the new one. Returns the new id.
    pub fn create_conversation(&mut self, name: Option<String>) -> String {
        let name = name.unwrap_or_else(|| format!("New Chat {}", self.conversations.len() + 1));
        let conversation = Conversation::new(name);
        let id = conversation.id.clone();
        self.conversations.push(conversation);
        self.selected_id = Some(id.clone());
        id
    }

    /// Accept a user message: append it, mark the conversation loading, and
    /// describe the requests that must follow.
    ///
    /// Returns `None` (and changes nothing) when `text` is blank or the
    /// conversation does not exist.
    pub fn begin_send(&mut self, conversation_id: &str, text: &str) -> Option<PendingSend> {
        if text.trim().is_empty() {
            return None;
        }
        let conversation = self.conversation_mut(conversation_id)?;

        let first_question = conversation.awaiting_first_question();
        conversation.push_message(Message::user(text));
        conversation.is_loading = true;

        Some(PendingSend {
            conversation_id: conversation_id.to_owned(),
            question: text.to_owned(),
            title_seed: first_question.then(|| text.to_owned()),
        })
    }

    /// Fold a finished request into the conversation it targets.
    pub fn apply(&mut self, update: StoreUpdate) {
        match update {
            StoreUpdate::Title { conversation_id, result } => {
                self.apply_title(&conversation_id, result);
            }
            StoreUpdate::Answer { conversation_id, result } => {
                self.apply_answer(&conversation_id, result);
            }
        }
    }

    fn apply_title(&mut self, conversation_id: &str, result: Result<String, ApiError>) {
        let Some(conversation) = self.conversation_mut(conversation_id) else {
            log::debug!("title for unknown conversation {conversation_id} dropped");
            return;
        };
        match result {
            Ok(title) if !title.trim().is_empty() => {
                log::info!("conversation {conversation_id} titled {title:?}");
                conversation.name = title.trim().to_owned();
            }
            Ok(_) => log::warn!("title generation returned a blank title for {conversation_id}"),
            Err(e) => log::warn!("title generation failed for {conversation_id}: {e}"),
        }
    }

    fn apply_answer(&mut self, conversation_id: &str, result: Result<String, ApiError>) {
        let Some(conversation) = self.conversation_mut(conversation_id) else {
            log::debug!("answer for unknown conversation {conversation_id} dropped");
            return;
        };
        let text = match result {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("question request failed for {conversation_id}: {e}");
                FALLBACK_REPLY_TEXT.to_owned()
            }
        };
        conversation.push_message(Message::bot(text));
        conversation.is_loading = false;
    }
}
