//! Infrastructure layer for the Habibi Dubai guide.
//!
//! Implements the ports defined in `habibi-core`: the SQLite chat log and the
//! Gemini generation provider. Also loads `config.toml` and resolves the API
//! key from the environment or `secrets.toml`.

pub mod config;
pub mod llm;
pub mod secret;
pub mod sqlite;
