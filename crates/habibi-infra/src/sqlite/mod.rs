//! SQLite storage layer.
//!
//! The chat log backed by SQLite with WAL mode and split read/write
//! connection pools.

pub mod chat_log;
pub mod pool;
