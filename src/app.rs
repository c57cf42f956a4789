//! Root application component and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{chat_list::ChatList, chat_panel::ChatPanel};
use crate::config::ApiConfig;
use crate::net::api::{ChatBackend, HttpChatBackend};
use crate::state::store::ConversationStore;

/// Root application component.
///
/// Owns the conversation store and the backend client and provides both as
/// context to the list and thread components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::load();
    log::debug!("chat endpoint {}, title endpoint {}", config.api_url, config.title_api_url);

    let store = RwSignal::new(ConversationStore::default());
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpChatBackend::new(config));

    provide_context(store);
    provide_context(backend);

    view! {
        <Title text="Perso.ai Chat"/>

        <main class="chat-app">
            <ChatList/>
            <ChatPanel/>
        </main>
    }
}
