//! Chat session and chat-log abstractions.
//!
//! - `ChatSession`: in-memory ordered transcript for one user session
//! - `SessionRegistry`: handle-based lookup of live sessions
//! - `ChatLogRepository`: append-only persistence port implemented in infra

pub mod registry;
pub mod repository;
pub mod session;
