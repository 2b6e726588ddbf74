//! API key resolution.
//!
//! Sources are checked in priority order, first non-blank value wins:
//! 1. Environment variable (`env`)
//! 2. `{data_dir}/secrets.toml` (`file`)
//!
//! There is no built-in fallback key: when no source has a value, startup
//! fails with [`ConfigError::MissingCredential`].

pub mod env;
pub mod file;

use std::path::Path;

use secrecy::SecretString;

use habibi_types::config::API_KEY_NAME;
use habibi_types::error::ConfigError;

use self::env::EnvSecretSource;
use self::file::SecretsFileSource;

/// A read-only place a secret value can come from.
pub trait SecretSource: Send + Sync {
    /// Short label for logs (never the value).
    fn name(&self) -> &str;

    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

/// Default source chain for a data directory.
pub fn build_secret_chain(data_dir: &Path) -> Vec<Box<dyn SecretSource>> {
    vec![
        Box::new(EnvSecretSource::new()),
        Box::new(SecretsFileSource::new(data_dir.join("secrets.toml"))),
    ]
}

/// Resolve `key` through `chain`, skipping blank values.
pub fn resolve_secret(
    chain: &[Box<dyn SecretSource>],
    key: &str,
    location: &str,
) -> Result<SecretString, ConfigError> {
    for source in chain {
        if let Some(value) = source.get(key)? {
            if value.trim().is_empty() {
                tracing::debug!(source = source.name(), key, "Ignoring blank secret value");
                continue;
            }
            tracing::debug!(source = source.name(), key, "Resolved secret");
            return Ok(SecretString::from(value.trim().to_string()));
        }
    }

    Err(ConfigError::MissingCredential {
        key: key.to_string(),
        location: location.to_string(),
    })
}

/// Resolve the Gemini API key for `data_dir`.
pub fn resolve_api_key(data_dir: &Path) -> Result<SecretString, ConfigError> {
    let chain = build_secret_chain(data_dir);
    let location = data_dir.join("secrets.toml");
    resolve_secret(&chain, API_KEY_NAME, &location.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    struct StaticSource(Option<&'static str>);

    impl SecretSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        fn get(&self, _key: &str) -> Result<Option<String>, ConfigError> {
            Ok(self.0.map(str::to_string))
        }
    }

    fn file_source(dir: &Path, content: &str) -> Box<dyn SecretSource> {
        let path = dir.join("secrets.toml");
        std::fs::write(&path, content).unwrap();
        Box::new(SecretsFileSource::new(path))
    }

    #[test]
    fn test_first_source_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let chain = vec![
            Box::new(StaticSource(Some("from-env"))) as Box<dyn SecretSource>,
            file_source(tmp.path(), "GEMINI_API_KEY = \"from-file\"\n"),
        ];
        let key = resolve_secret(&chain, API_KEY_NAME, "secrets.toml").unwrap();
        assert_eq!(key.expose_secret(), "from-env");
    }

    #[test]
    fn test_falls_back_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let chain = vec![
            Box::new(StaticSource(None)) as Box<dyn SecretSource>,
            file_source(tmp.path(), "GEMINI_API_KEY = \"from-file\"\n"),
        ];
        let key = resolve_secret(&chain, API_KEY_NAME, "secrets.toml").unwrap();
        assert_eq!(key.expose_secret(), "from-file");
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let chain = vec![
            Box::new(StaticSource(Some("   "))) as Box<dyn SecretSource>,
            file_source(tmp.path(), "GEMINI_API_KEY = \"\"\n"),
        ];
        let err = resolve_secret(&chain, API_KEY_NAME, "secrets.toml").unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { ref key, .. } if key == API_KEY_NAME));
    }

    #[test]
    fn test_missing_everywhere_is_fatal() {
        let chain = vec![Box::new(StaticSource(None)) as Box<dyn SecretSource>];
        let err = resolve_secret(&chain, API_KEY_NAME, "/data/secrets.toml").unwrap_err();
        assert!(err.to_string().contains("/data/secrets.toml"));
    }
}
