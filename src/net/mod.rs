//! Networking modules for the question-answering backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP calls and the `ChatBackend` seam used by the store,
//! and `types` defines the JSON wire schema for both endpoints.

pub mod api;
pub mod types;
