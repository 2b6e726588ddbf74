//! Environment variable secret source.
//!
//! Highest priority in the chain: a set variable overrides `secrets.toml`.

use habibi_types::error::ConfigError;

use super::SecretSource;

pub struct EnvSecretSource;

impl EnvSecretSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretSource for EnvSecretSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match std::env::var(key) {
            Ok(val) => Ok(Some(val)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            // Present but not valid Unicode: treat as absent, secrets must be strings.
            Err(std::env::VarError::NotUnicode(_)) => Ok(None),
        }
    }
}
