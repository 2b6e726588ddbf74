//! Configuration and storage status command.
//!
//! Works without an API key so a missing credential can be diagnosed.

use anyhow::Result;
use console::style;

use habibi_core::chat::repository::ChatLogRepository;
use habibi_infra::config::{database_path, load_config, resolve_data_dir};
use habibi_infra::secret::resolve_api_key;
use habibi_types::config::API_KEY_NAME;

use crate::state::open_chat_log;

/// Display data dir, model, prompt style, credential presence and row count.
pub async fn status(json: bool) -> Result<()> {
    let data_dir = resolve_data_dir();
    let config = load_config(&data_dir).await;
    let db_path = database_path(&data_dir, &config);
    let has_key = resolve_api_key(&data_dir).is_ok();

    // Count only an existing database; status never creates one.
    let rows = if tokio::fs::try_exists(&db_path).await.unwrap_or(false) {
        let chat_log = open_chat_log(&data_dir, &config).await?;
        chat_log.count_messages().await.ok()
    } else {
        None
    };

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": data_dir.display().to_string(),
            "database": db_path.display().to_string(),
            "model": config.model,
            "prompt_style": config.prompt_style,
            "credential": has_key,
            "messages": rows,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Habibi v{}",
        style("*").yellow().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Guide ──").dim());
    println!("  Model:    {}", style(&config.model).bold());
    println!("  Style:    {}", config.prompt_style);
    if has_key {
        println!("  API key:  {}", style("configured").green());
    } else {
        println!(
            "  API key:  {} (set {API_KEY_NAME} or add it to secrets.toml)",
            style("missing").red()
        );
    }
    println!();

    println!("  {}", style("── Storage ──").dim());
    println!("  Data dir: {}", style(data_dir.display()).dim());
    println!("  Database: {}", style(db_path.display()).dim());
    match rows {
        Some(n) => println!("  Messages: {}", style(n).bold()),
        None => println!("  Messages: {}", style("none yet").dim()),
    }
    println!();

    Ok(())
}
