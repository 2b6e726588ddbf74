//! Shared domain types for the Habibi Dubai guide.
//!
//! Chat turns, persisted log rows, guide categories, provider request shapes,
//! configuration, and the error enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod guide;
pub mod llm;
