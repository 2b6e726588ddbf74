//! Guide configuration types.
//!
//! `GuideConfig` represents `config.toml` in the data directory. All fields
//! have defaults so an absent or partial file is valid.

use serde::{Deserialize, Serialize};

use crate::guide::PromptStyle;

/// Name of the secret holding the Gemini API key.
pub const API_KEY_NAME: &str = "GEMINI_API_KEY";

/// Top-level configuration for the guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Gemini model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Template wording for all three views.
    #[serde(default)]
    pub prompt_style: PromptStyle,

    /// Base URL of the Generative Language API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// SQLite file name, relative to the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Seconds a web chat session may sit unused before it is dropped.
    #[serde(default = "default_session_idle_ttl_secs")]
    pub session_idle_ttl_secs: u64,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    300
}

fn default_database_file() -> String {
    "habibi.db".to_string()
}

fn default_session_idle_ttl_secs() -> u64 {
    30 * 60
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            prompt_style: PromptStyle::default(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            max_output_tokens: None,
            temperature: None,
            database_file: default_database_file(),
            session_idle_ttl_secs: default_session_idle_ttl_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_config_default_values() {
        let config = GuideConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.prompt_style, PromptStyle::Detailed);
        assert_eq!(config.database_file, "habibi.db");
        assert_eq!(config.request_timeout_secs, 300);
        assert_eq!(config.session_idle_ttl_secs, 1800);
        assert!(config.temperature.is_none());
    }

    #[test]
    fn test_guide_config_deserialize_empty() {
        let config: GuideConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
    }

    #[test]
    fn test_guide_config_deserialize_with_values() {
        let toml_str = r#"
model = "gemini-1.5-pro"
prompt_style = "brief"
max_output_tokens = 512
temperature = 0.4
"#;
        let config: GuideConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.prompt_style, PromptStyle::Brief);
        assert_eq!(config.max_output_tokens, Some(512));
        assert_eq!(config.temperature, Some(0.4));
        assert_eq!(config.database_file, "habibi.db");
    }
}
