//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the conversation list and the active thread while
//! reading/writing the conversation store from Leptos context.

pub mod chat_list;
pub mod chat_panel;
