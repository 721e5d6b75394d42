//! Ledger Lore MCP Server - Entry Point
//!
//! This is the main entry point for the ledger-lore MCP server.
//! It sets up logging, parses arguments, and starts the server.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ledger_lore::config;
use ledger_lore::mcp::LedgerLore;
use ledger_lore::repo::Repository;

/// MCP server for read-only knowledge queries over the GL publisher repository.
#[derive(Parser, Debug)]
#[command(name = "ledger-lore")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository root. Falls back to $GL_PUBLISHER_PATH, then
    /// ~/IdeaProjects/oracle-gl-publisher.
    #[arg(short, long)]
    repo: Option<PathBuf>,

    /// Maximum number of files a single code search may read.
    #[arg(long, default_value_t = 20_000)]
    max_scan_files: usize,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add ledger-lore to .mcp.json in the current directory.
    Config,
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!("invalid log level: {}", other),
        }
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    // Create an env filter that respects RUST_LOG but has a default level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ledger_lore={level},rmcp={level}")));

    // Note: We write logs to stderr to keep stdout clean for MCP communication
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Main entry point.
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if matches!(args.command, Some(Command::Config)) {
        return config::configure(args.repo.as_deref());
    }

    let log_level = args.parse_log_level()?;
    init_tracing(log_level)?;

    let root = config::resolve_repo_root(args.repo)?;
    let repo = Repository::builder()
        .root(&root)
        .max_scan_files(args.max_scan_files)
        .build()
        .with_context(|| format!("failed to open repository: {}", root.display()))?;

    info!(
        repo = %repo.root().display(),
        "starting ledger-lore MCP server"
    );

    let server = LedgerLore::new(repo);

    info!("starting MCP server with stdio transport");

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;

    info!("MCP server started, waiting for messages");

    // Wait for the service to complete (handles graceful shutdown)
    service.waiting().await?;

    info!("MCP server shut down gracefully");

    Ok(())
}
