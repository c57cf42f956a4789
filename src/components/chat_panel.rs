//! Active conversation thread with the message input.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::ChatBackend;
use crate::state::composer::{ComposerState, should_submit};
use crate::state::store::ConversationStore;
use crate::util::transcript::{scroll_key, transcript_rows};

/// Transcript of the selected conversation plus a draft input and Send button.
///
/// Submitting captures the selected conversation id at that moment and spawns
/// the exchange; the reply is applied to that conversation even if the user
/// has switched away by the time it arrives.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let store = expect_context::<RwSignal<ConversationStore>>();
    let backend = StoredValue::new(expect_context::<Arc<dyn ChatBackend>>());

    let composer = RwSignal::new(ComposerState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view. Title and loading changes leave the key alone.
    let visible_transcript = Memo::new(move |_| store.with(scroll_key));
    Effect::new(move || {
        let _ = visible_transcript.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let Some(conversation_id) = store.with_untracked(|s| s.selected_id().map(str::to_owned)) else {
            return;
        };
        let Some(text) = composer.try_update(ComposerState::submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                crate::state::exchange::send_message(backend.as_ref(), &store, &conversation_id, &text).await;
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, conversation_id, text);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        // keyCode 229 marks keydowns an input method is still handling.
        let composing = ev.is_composing() || ev.key_code() == 229;
        if should_submit(&ev.key(), ev.shift_key(), composing) {
            ev.prevent_default();
            do_send();
        }
    };

    let title = move || {
        store.with(|s| {
            s.active_conversation()
                .map(|c| c.name.clone())
                .unwrap_or_default()
        })
    };
    let is_loading = move || store.with(|s| s.active_conversation().is_some_and(|c| c.is_loading));
    let can_send = move || composer.with(ComposerState::can_submit);

    view! {
        <section class="chat-panel">
            <header class="chat-panel__header">{title}</header>

            <div class="chat-panel__messages" node_ref=messages_ref>
                <For
                    each=move || {
                        store.with(|s| s.active_conversation().map(transcript_rows).unwrap_or_default())
                    }
                    key=|row| row.id.clone()
                    children=move |row| {
                        let from_bot = !row.from_user;
                        view! {
                            <div
                                class="chat-panel__message"
                                class:chat-panel__message--user=row.from_user
                                class:chat-panel__message--bot=from_bot
                            >
                                <div class="chat-panel__bubble">{row.text}</div>
                            </div>
                        }
                    }
                />
                {move || is_loading().then(|| view! { <div class="chat-panel__typing">"..."</div> })}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    aria-label="Type your message"
                    prop:value=move || composer.with(|c| c.draft.clone())
                    on:input=move |ev| composer.update(|c| c.update_input(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    aria-label="Send message"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}
