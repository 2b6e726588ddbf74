//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! `GuideService` is generic over its chat log, but AppState pins it to the
//! SQLite implementation.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use habibi_core::chat::registry::SessionRegistry;
use habibi_core::chat::repository::ChatLogRepository;
use habibi_core::llm::box_provider::BoxLlmProvider;
use habibi_core::llm::dispatcher::PromptDispatcher;
use habibi_core::service::guide::GuideService;
use habibi_infra::config::{database_path, load_config, resolve_data_dir};
use habibi_infra::llm::create_provider;
use habibi_infra::secret::resolve_api_key;
use habibi_infra::sqlite::chat_log::SqliteChatLogRepository;
use habibi_infra::sqlite::pool::DatabasePool;
use habibi_types::config::GuideConfig;

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteGuideService = GuideService<SqliteChatLogRepository>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub guide_service: Arc<ConcreteGuideService>,
    pub sessions: Arc<SessionRegistry>,
    pub config: Arc<GuideConfig>,
}

impl AppState {
    /// Initialize the application state: resolve the credential, connect to
    /// the DB, create the `chat` table and wire the guide service.
    ///
    /// A missing API key fails here, before anything is served.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let api_key = resolve_api_key(&data_dir)?;

        let chat_log = open_chat_log(&data_dir, &config).await?;
        chat_log.ensure_schema().await?;

        let provider = create_provider(&config, api_key)?;

        tracing::info!(
            data_dir = %data_dir.display(),
            model = %config.model,
            style = %config.prompt_style,
            "Guide initialized"
        );

        Ok(Self::from_parts(provider, chat_log, config))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(
        provider: BoxLlmProvider,
        chat_log: SqliteChatLogRepository,
        config: GuideConfig,
    ) -> Self {
        let dispatcher = PromptDispatcher::new(provider, config.model.clone())
            .with_max_output_tokens(config.max_output_tokens)
            .with_temperature(config.temperature);
        let guide_service = GuideService::new(dispatcher, chat_log, config.prompt_style);

        Self {
            guide_service: Arc::new(guide_service),
            sessions: Arc::new(SessionRegistry::with_idle_ttl(Duration::from_secs(
                config.session_idle_ttl_secs,
            ))),
            config: Arc::new(config),
        }
    }
}

/// Open the chat log database named by `config` inside `data_dir`.
pub async fn open_chat_log(
    data_dir: &Path,
    config: &GuideConfig,
) -> anyhow::Result<SqliteChatLogRepository> {
    let pool = DatabasePool::open(&database_path(data_dir, config)).await?;
    Ok(SqliteChatLogRepository::new(pool))
}
