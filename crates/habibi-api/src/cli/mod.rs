//! CLI command definitions and dispatch for the `habibi` binary.
//!
//! Uses clap derive macros for argument parsing. Each guide view has a
//! one-shot command, plus `serve` for the web UI and `chat` for an
//! interactive session.

pub mod chat;
pub mod guide;
pub mod history;
pub mod status;

use std::time::Duration;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};

/// Your pocket guide to Dubai: translations, recommendations and chat.
#[derive(Parser)]
#[command(name = "habibi", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI and REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Translate an English word or phrase into Arabic.
    #[command(alias = "tr")]
    Translate {
        /// Text to translate.
        text: String,
    },

    /// Show recommendations for a category.
    Recommend {
        /// Category: "Top Attractions", "Luxury Hotels", "Budget Eats" or
        /// "Hidden Gems" (case-insensitive, `-`/`_` allowed).
        category: String,
    },

    /// Start an interactive chat session.
    Chat,

    /// Show configuration and storage status.
    Status,

    /// Show the most recent persisted chat messages.
    History {
        /// Maximum number of rows to show.
        #[arg(short, long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Steady-tick spinner with a message. Hidden when `quiet`.
pub(crate) fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
