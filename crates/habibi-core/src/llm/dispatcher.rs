//! PromptDispatcher -- one composed prompt in, raw generated text out.
//!
//! The dispatcher owns the provider and the fixed model settings. It does
//! not validate or post-process the response and never retries: any
//! provider failure is returned as a single [`DispatchError`].

use tracing::{Instrument, debug, info_span, warn};

use habibi_types::error::DispatchError;
use habibi_types::llm::CompletionRequest;

use super::box_provider::BoxLlmProvider;

pub struct PromptDispatcher {
    provider: BoxLlmProvider,
    model: String,
    max_output_tokens: Option<u32>,
    temperature: Option<f64>,
}

impl PromptDispatcher {
    pub fn new(provider: BoxLlmProvider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            max_output_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send `prompt` to the provider and return the generated text unmodified.
    ///
    /// Callers reject blank input before getting here.
    pub async fn generate(&self, prompt: &str) -> Result<String, DispatchError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = ?request.max_output_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        match self.provider.complete(&request).instrument(span).await {
            Ok(response) => {
                debug!(
                    model = %response.model,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    finish_reason = ?response.finish_reason,
                    "Generation completed"
                );
                Ok(response.content)
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Generation failed");
                Err(DispatchError::from(e))
            }
        }
    }
}
