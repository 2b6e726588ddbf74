//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`](habibi_core::llm::provider::LlmProvider)
//! implementation for Google Gemini and a factory that builds it from the
//! loaded configuration.

pub mod gemini;

use std::time::Duration;

use secrecy::SecretString;

use habibi_core::llm::box_provider::BoxLlmProvider;
use habibi_types::config::GuideConfig;
use habibi_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Build the boxed generation provider described by `config`.
pub fn create_provider(config: &GuideConfig, api_key: SecretString) -> Result<BoxLlmProvider, LlmError> {
    let provider = GeminiProvider::new(api_key, Duration::from_secs(config.request_timeout_secs))?
        .with_base_url(config.base_url.clone());
    Ok(BoxLlmProvider::new(provider))
}
