//! Sidebar listing conversations with a "New Chat" action.

use leptos::prelude::*;

use crate::state::store::ConversationStore;
use crate::util::transcript::chat_list_items;

/// Conversation list. Emits select and create intents into the store.
#[component]
pub fn ChatList() -> impl IntoView {
    let store = expect_context::<RwSignal<ConversationStore>>();

    let on_new = move |_| {
        store.update(|s| {
            s.create_conversation(None);
        });
    };

    view! {
        <aside class="chat-list">
            <header class="chat-list__header">
                <h2 class="chat-list__title">"Chats"</h2>
                <button class="btn btn--primary chat-list__new" on:click=on_new>
                    "+ New Chat"
                </button>
            </header>

            <ul class="chat-list__items">
                {move || {
                    store
                        .with(chat_list_items)
                        .into_iter()
                        .map(|item| {
                            let id = item.id;
                            let on_select = move |_| {
                                store.update(|s| {
                                    s.select_conversation(&id);
                                });
                            };
                            view! {
                                <li>
                                    <button
                                        class="chat-list__item"
                                        class:chat-list__item--selected=item.selected
                                        on:click=on_select
                                    >
                                        <span class="chat-list__name">{item.name}</span>
                                        <span class="chat-list__snippet">{item.snippet}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </aside>
    }
}
