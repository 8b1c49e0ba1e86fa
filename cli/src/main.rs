//! CLI entrypoint for Decision Swarm
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod ask;

use anyhow::{Context, Result, anyhow, bail};
use ask::{AskOptions, Backend};
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use swarm_application::LlmGateway;
use swarm_domain::Query;
use swarm_infrastructure::{ConfigLoader, FileConfig, GatewaySettings, HttpLlmGateway, JsonHistoryStore};
use swarm_presentation::{AppState, Cli, Command, ConsoleFormatter, RemoteSwarmClient, server};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held for the life of main so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    info!("Starting Decision Swarm");

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {}", e),
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in config.check()? {
        warn!("{}", issue.message);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `decision-swarm --help` for usage.");
    };

    match command {
        Command::Serve { bind } => serve(&config, bind).await,
        Command::Ask {
            query,
            server,
            followups,
            json,
            quiet,
        } => {
            let query = Query::parse(query)?;

            // === Dependency Injection ===
            let backend = match server {
                Some(url) => Backend::Remote(RemoteSwarmClient::new(url)),
                None => Backend::Local {
                    gateway: build_gateway(&config)?,
                    followup_model: config.followups.model(),
                },
            };

            ask::run(
                &backend,
                &config,
                query,
                AskOptions {
                    followups,
                    json,
                    quiet,
                },
            )
            .await
        }
        Command::History { clear } => history(&config, clear),
    }
}

/// Console logging filtered by `-v` (overridable with `RUST_LOG`), plus an
/// optional daily-rotated file.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "decision-swarm.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
    }
}

fn build_gateway(config: &FileConfig) -> Result<Arc<dyn LlmGateway>> {
    let gateway = HttpLlmGateway::new(GatewaySettings::from_config(&config.gateway))?;
    Ok(Arc::new(gateway))
}

async fn serve(config: &FileConfig, bind: Option<String>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", bind))?;

    let state = AppState::new(build_gateway(config)?, config.followups.model());

    println!("Decision Swarm listening on http://{}", addr);
    println!("   Analyze:   POST http://{}/api/analyze", addr);
    println!("   Follow-ups: POST http://{}/api/followups", addr);

    server::serve(addr, state, config.server.origin()).await?;
    Ok(())
}

fn history(config: &FileConfig, clear: bool) -> Result<()> {
    let path = config
        .history
        .resolve_path()
        .context("No history location available; set history.path")?;
    let store = JsonHistoryStore::new(path);

    if clear {
        store.clear()?;
        println!("History cleared.");
    } else {
        print!("{}", ConsoleFormatter::format_history(&store.load()?));
    }
    Ok(())
}
