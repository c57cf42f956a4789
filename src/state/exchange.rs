//! Async send flow: accept the user message, call the backend, fold results back.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components spawn [`send_message`] on the UI thread with `spawn_local`.
//! The title and answer requests run concurrently and each result is applied
//! as soon as it arrives, targeted at the conversation captured when the
//! message was accepted. No retry and no cancellation: a completion that
//! arrives after the user switched conversations still lands where it belongs.

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;

use leptos::prelude::{RwSignal, Update};

use super::store::{ConversationStore, StoreUpdate};
use crate::net::api::ChatBackend;

/// Somewhere a [`ConversationStore`] can be mutated in place.
pub trait StoreHandle {
    /// Run `f` against the store. Returns `None` if the store is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut ConversationStore) -> R) -> Option<R>;
}

impl StoreHandle for RwSignal<ConversationStore> {
    fn modify<R>(&self, f: impl FnOnce(&mut ConversationStore) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Send `text` as a user message in `conversation_id` and apply the replies.
///
/// Blank text or an unknown conversation is a no-op and issues no request.
pub async fn send_message<B, S>(backend: &B, store: &S, conversation_id: &str, text: &str)
where
    B: ChatBackend + ?Sized,
    S: StoreHandle,
{
    let Some(pending) = store
        .modify(|s| s.begin_send(conversation_id, text))
        .flatten()
    else {
        return;
    };

    let title = async {
        if let Some(seed) = pending.title_seed.as_deref() {
            let result = backend.generate_title(seed).await;
            store.modify(|s| {
                s.apply(StoreUpdate::Title { conversation_id: pending.conversation_id.clone(), result });
            });
        }
    };

    let answer = async {
        let result = backend.ask(&pending.question).await;
        store.modify(|s| {
            s.apply(StoreUpdate::Answer { conversation_id: pending.conversation_id.clone(), result });
        });
    };

    futures::join!(title, answer);
}
