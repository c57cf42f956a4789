//! Conversation and message data model.
//!
//! SYSTEM CONTEXT
//! ==============
//! A conversation is an append-only transcript plus a display name and a
//! loading flag. The list snippet is derived from the transcript, so the
//! message vector is private and only grows through [`Conversation::push_message`].

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

/// Bot greeting every new conversation starts with.
pub const GREETING_TEXT: &str = "안녕하세요! Perso.ai에 대해 궁금한 점을 물어보세요.";

/// Bot reply appended when the question-answering request fails for any reason.
pub const FALLBACK_REPLY_TEXT: &str = "죄송합니다. 일시적인 오류가 발생했습니다. 다시 시도해주세요.";

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    /// The person typing into the client.
    User,
    /// The automated responder.
    Bot,
}

/// A single transcript entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
}

impl Message {
    /// Create a message with a fresh UUID.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text: text.into() }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

/// One named thread of messages with its own loading state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    /// Conversation ID (UUID string), unique within the store.
    pub id: String,
    /// Display name; replaced once by the generated title.
    pub name: String,
    /// True while a question-answering request is in flight.
    pub is_loading: bool,
    messages: Vec<Message>,
    last_message_snippet: String,
}

impl Conversation {
    /// Create a conversation seeded with the bot greeting.
    pub fn new(name: impl Into<String>) -> Self {
        let mut conversation = Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            is_loading: false,
            messages: Vec::new(),
            last_message_snippet: String::new(),
        };
        conversation.push_message(Message::bot(GREETING_TEXT));
        conversation
    }

    /// Messages in display order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Preview text for the conversation list; mirrors the latest message.
    #[must_use]
    pub fn last_message_snippet(&self) -> &str {
        &self.last_message_snippet
    }

    /// Append a message and refresh the snippet.
    pub fn push_message(&mut self, message: Message) {
        self.last_message_snippet.clone_from(&message.text);
        self.messages.push(message);
    }

    /// True while the transcript is only the bot greeting, i.e. the next
    /// user message is the first one.
    #[must_use]
    pub fn awaiting_first_question(&self) -> bool {
        matches!(self.messages.as_slice(), [only] if only.sender == Sender::Bot)
    }
}
