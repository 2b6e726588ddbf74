//! Interactive chat loop for `habibi chat`.
//!
//! One in-process session per run. Each message goes through the same
//! guide service as the web chat, so exchanges are persisted to the `chat`
//! table as they happen.

pub mod commands;
pub mod input;
pub mod renderer;

use std::io::Write;

use anyhow::Result;
use console::style;

use habibi_core::chat::session::ChatSession;
use habibi_types::chat::TurnRole;
use habibi_types::error::GuideError;

use self::commands::ChatCommand;
use self::input::{ChatInput, InputEvent};
use self::renderer::GuideRenderer;
use super::spinner;
use crate::state::AppState;

/// Run the chat loop until `/exit` or Ctrl+D.
pub async fn run_chat_loop(state: &AppState, quiet: bool) -> Result<()> {
    let mut session = ChatSession::new();
    let renderer = GuideRenderer::new();

    println!();
    println!(
        "  {} Habibi chat  {}",
        style("*").yellow().bold(),
        style(format!(
            "{} {} . session {}",
            state.guide_service.dispatcher().provider_name(),
            state.guide_service.dispatcher().model(),
            session.id()
        ))
        .dim()
    );
    println!("  {}", style("Ask anything about Dubai. /help for commands.").dim());
    println!();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, mut out) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                writeln!(out, "\n  {}", style("Session ended.").dim())?;
                break;
            }
            InputEvent::Interrupted => {
                writeln!(out, "\n  {}", style("Press Ctrl+D or /exit to leave.").dim())?;
                continue;
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => writeln!(out, "{}", commands::help_text())?,
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            writeln!(out, "\n  {}", style("Session ended.").dim())?;
                            break;
                        }
                        ChatCommand::History => {
                            writeln!(out)?;
                            for turn in session.all() {
                                let label = match turn.role {
                                    TurnRole::User => style("You").green().bold(),
                                    TurnRole::Assistant => style("Habibi").yellow().bold(),
                                };
                                writeln!(out, "  {label} {}", turn.content)?;
                            }
                            writeln!(out)?;
                        }
                        ChatCommand::Unknown(name) => writeln!(
                            out,
                            "\n  {} Unknown command: {}. Type /help for available commands.\n",
                            style("?").yellow().bold(),
                            style(name).dim()
                        )?,
                    }
                    continue;
                }

                let spinner = spinner("thinking...", quiet);
                let result = state.guide_service.chat(&mut session, &text).await;
                spinner.finish_and_clear();

                match result {
                    Ok(exchange) => {
                        writeln!(out, "\n  {}", style("Habibi").yellow().bold())?;
                        writeln!(out, "{}", renderer.render(&exchange.assistant.content).trim_end())?;
                        if let Some(err) = &exchange.storage_error {
                            writeln!(
                                out,
                                "  {} Could not save this exchange: {err}",
                                style("!").red().bold()
                            )?;
                        }
                        writeln!(out)?;
                    }
                    Err(GuideError::EmptyInput) => {
                        writeln!(out, "  {} {}", style("!").yellow().bold(), GuideError::EmptyInput)?;
                    }
                    Err(GuideError::Dispatch(e)) => {
                        writeln!(out, "\n  {} Chat Error: {e}", style("!").red().bold())?;
                        writeln!(out, "  {}", style("Type a message to retry, /exit to quit.").dim())?;
                    }
                }
            }
        }
    }

    chat_input.flush();
    tracing::info!(session_id = %session.id(), turns = session.len(), "Chat session closed");
    Ok(())
}
