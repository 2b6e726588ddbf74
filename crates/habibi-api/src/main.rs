//! Habibi CLI and web server entry point.
//!
//! Binary name: `habibi`
//!
//! Parses CLI arguments, initializes tracing and services, then dispatches
//! to the appropriate command handler or starts the web server.

mod cli;
mod http;
mod state;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use clap_complete::generate;

use habibi_core::chat::registry::SessionRegistry;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let serving = matches!(cli.command, Commands::Serve { .. });
    habibi_observe::tracing_setup::init_tracing(default_filter(&cli, serving), cli.otel)
        .map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;

    habibi_observe::tracing_setup::shutdown_tracing();
    result
}

/// Default log filter when `RUST_LOG` is unset.
fn default_filter(cli: &Cli, serving: bool) -> &'static str {
    match cli.verbose {
        0 if cli.quiet => "error",
        0 if serving => "info",
        0 => "warn",
        1 => "info,habibi_core=debug,habibi_infra=debug,habibi_api=debug",
        _ => "trace",
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Commands that must work without an API key
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "habibi", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Status => return cli::status::status(cli.json).await,
        Commands::History { limit } => return cli::history::history(*limit, cli.json).await,
        _ => {}
    }

    // Initialize application state (credential, DB, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Translate { text } => {
            cli::guide::translate(&state, &text, cli.json, cli.quiet).await?;
        }

        Commands::Recommend { category } => {
            cli::guide::recommend(&state, &category, cli.json, cli.quiet).await?;
        }

        Commands::Chat => {
            cli::chat::run_chat_loop(&state, cli.quiet).await?;
        }

        Commands::Serve { port, host } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Habibi listening on {}",
                console::style("*").yellow().bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let sweeper = spawn_session_sweeper(state.sessions.clone());
            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            sweeper.abort();
            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } | Commands::Status | Commands::History { .. } => {}
    }

    Ok(())
}

/// Periodically drop chat sessions whose browser tab went away without
/// deleting them.
fn spawn_session_sweeper(sessions: Arc<SessionRegistry>) -> tokio::task::JoinHandle<()> {
    let period = (sessions.idle_ttl() / 2).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let evicted = sessions.evict_idle();
            if evicted > 0 {
                tracing::info!(evicted, live = sessions.len(), "Idle chat sessions evicted");
            }
        }
    })
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
