//! Business logic and port definitions for the Habibi Dubai guide.
//!
//! This crate defines the provider and chat-log traits that the
//! infrastructure layer implements, plus the prompt templates, the
//! dispatcher, and the per-session transcript store. It depends only on
//! `habibi-types` -- never on `habibi-infra` or any database/HTTP crate.

pub mod chat;
pub mod llm;
pub mod prompt;
pub mod service;
