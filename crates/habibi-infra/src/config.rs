//! Configuration loader for the guide.
//!
//! Reads `config.toml` from the data directory (`~/.habibi/` in production)
//! and deserializes it into [`GuideConfig`]. Falls back to defaults when the
//! file is missing or malformed. Zero durations are replaced by their
//! defaults.

use std::path::{Path, PathBuf};

use habibi_types::config::GuideConfig;

/// Resolve the data directory.
///
/// `HABIBI_DATA_DIR` wins; otherwise `~/.habibi`; as a last resort `.habibi`
/// in the current directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HABIBI_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".habibi");
    }

    PathBuf::from(".habibi")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`GuideConfig::default()`].
/// - Unreadable or unparsable file: warning, then the default.
pub async fn load_config(data_dir: &Path) -> GuideConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GuideConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GuideConfig::default();
        }
    };

    match toml::from_str::<GuideConfig>(&content) {
        Ok(config) => with_nonzero_durations(config, &config_path),
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GuideConfig::default()
        }
    }
}

/// A zero reqwest timeout fails every request, and a zero idle TTL drops
/// sessions between two messages; both fall back to the defaults.
fn with_nonzero_durations(mut config: GuideConfig, config_path: &Path) -> GuideConfig {
    let defaults = GuideConfig::default();
    if config.request_timeout_secs == 0 {
        tracing::warn!(
            "request_timeout_secs = 0 in {} is not allowed, using {}",
            config_path.display(),
            defaults.request_timeout_secs
        );
        config.request_timeout_secs = defaults.request_timeout_secs;
    }
    if config.session_idle_ttl_secs == 0 {
        tracing::warn!(
            "session_idle_ttl_secs = 0 in {} is not allowed, using {}",
            config_path.display(),
            defaults.session_idle_ttl_secs
        );
        config.session_idle_ttl_secs = defaults.session_idle_ttl_secs;
    }
    config
}

/// Path of the SQLite file for `config` inside `data_dir`.
pub fn database_path(data_dir: &Path, config: &GuideConfig) -> PathBuf {
    data_dir.join(&config.database_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use habibi_types::guide::PromptStyle;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.prompt_style, PromptStyle::Detailed);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
model = "gemini-2.0-flash"
prompt_style = "brief"
database_file = "guide.db"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.prompt_style, PromptStyle::Brief);
        assert_eq!(database_path(tmp.path(), &config), tmp.path().join("guide.db"));
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.database_file, "habibi.db");
    }

    #[tokio::test]
    async fn load_config_zero_durations_fall_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            "request_timeout_secs = 0\nsession_idle_ttl_secs = 0\nmodel = \"gemini-1.5-pro\"\n",
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.request_timeout_secs, 300);
        assert_eq!(config.session_idle_ttl_secs, 1800);
        assert_eq!(config.model, "gemini-1.5-pro");
    }

    #[tokio::test]
    async fn load_config_keeps_nonzero_timeout() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "request_timeout_secs = 30\n")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.request_timeout_secs, 30);
    }
}
