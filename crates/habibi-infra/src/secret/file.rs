//! `secrets.toml` secret source.
//!
//! A flat TOML table of string values in the data directory, e.g.
//!
//! ```toml
//! GEMINI_API_KEY = "..."
//! ```
//!
//! A missing file means "no value"; an unreadable or malformed one is an error.

use std::collections::HashMap;
use std::path::PathBuf;

use habibi_types::error::ConfigError;

use super::SecretSource;

pub struct SecretsFileSource {
    path: PathBuf,
}

impl SecretsFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SecretSource for SecretsFileSource {
    fn name(&self) -> &str {
        "secrets.toml"
    }

    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(ConfigError::Read {
                    path: self.path.display().to_string(),
                    message: err.to_string(),
                });
            }
        };

        let table: HashMap<String, toml::Value> =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(table
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }
}
