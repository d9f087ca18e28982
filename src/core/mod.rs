//! Shared building blocks: the JSON file store, the error type, timestamps
//! and text rendering.

pub mod error;
pub mod output;
pub mod store;
pub mod time;
