//! # perso-chat
//!
//! Leptos + WASM chat client for the Perso.ai question-answering service.
//!
//! This crate contains the root component, the conversation list and thread
//! components, the conversation store, and the HTTP backend that talks to the
//! question-answering and title-generation endpoints. Browser-only code sits
//! behind the `csr` feature so the store and helpers build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then mounts
/// the root component on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
