//! Recent persisted chat rows, read-only.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use habibi_infra::config::{database_path, load_config, resolve_data_dir};
use habibi_types::chat::{PersistedMessage, Sender};

use crate::state::open_chat_log;

/// Show the `limit` most recent rows of the `chat` table, oldest first.
pub async fn history(limit: u32, json: bool) -> Result<()> {
    let data_dir = resolve_data_dir();
    let config = load_config(&data_dir).await;

    let messages = if tokio::fs::try_exists(database_path(&data_dir, &config))
        .await
        .unwrap_or(false)
    {
        open_chat_log(&data_dir, &config)
            .await?
            .recent_messages(limit)
            .await?
    } else {
        Vec::new()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    if messages.is_empty() {
        println!("\n  {}\n", style("No chat history yet.").dim());
        return Ok(());
    }

    println!("\n{}\n", history_table(&messages));
    Ok(())
}

fn history_table(messages: &[PersistedMessage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Time").fg(Color::White),
        Cell::new("Sender").fg(Color::White),
        Cell::new("Message").fg(Color::White),
    ]);

    for msg in messages {
        let sender_color = match msg.sender {
            Sender::User => Color::Green,
            Sender::Ai => Color::Yellow,
        };
        table.add_row(vec![
            Cell::new(msg.timestamp.format("%Y-%m-%d %H:%M:%S")).fg(Color::DarkGrey),
            Cell::new(msg.sender.as_str()).fg(sender_color),
            Cell::new(preview(&msg.message, 120)),
        ]);
    }

    table
}

/// Truncate on a char boundary.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}
