//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure view-model derivations live here so components stay thin and the
//! rendered output can be tested without a DOM.

pub mod transcript;
