//! LLM provider abstractions.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: object-safe wrapper for dynamic dispatch
//! - `PromptDispatcher`: sends one composed prompt and returns the raw text

pub mod box_provider;
pub mod dispatcher;
pub mod provider;
