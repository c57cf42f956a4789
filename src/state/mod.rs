//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `conversation` holds the transcript data model, `store` the collection of
//! conversations with its update functions, `exchange` the async send flow
//! that folds backend results back into the store, and `composer` the input
//! draft owned by the thread view.

pub mod composer;
pub mod conversation;
pub mod exchange;
pub mod store;
