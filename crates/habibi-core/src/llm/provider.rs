//! LlmProvider trait definition.
//!
//! This is the core abstraction that generation backends implement.
//! Uses RPITIT for `complete`; see `BoxLlmProvider` for dynamic dispatch.

use habibi_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (Gemini today).
///
/// Implementations live in habibi-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a generation request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
