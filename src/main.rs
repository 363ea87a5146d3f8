// src/main.rs
// =============================================================================
// Entry point.
//
// What happens here:
// 1. Set up logging (to stderr, stdout belongs to the MCP transport)
// 2. Parse command-line arguments into a FinderConfig
// 3. Serve MCP on stdio, or run a single `find`
// 4. Exit with proper code (0 = links found, 1 = no links, 2 = error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use std::time::Duration;

// anyhow::Result lets run() return any error with ?
use anyhow::Result;
use clap::Parser; // Parser trait enables Cli::parse()
use tokio_util::sync::CancellationToken; // same token type rmcp uses per request
use tracing::warn;
use tracing_subscriber::EnvFilter;

// The library half of this crate (src/lib.rs)
use challenge_finder::{server, FinderConfig, SolutionFinder};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Logging first, before anything can emit events
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole anyhow context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr with RUST_LOG filtering (default: info)
fn init_logging() {
    // RUST_LOG=debug (or e.g. challenge_finder=debug) overrides the default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stderr only: in serve mode stdout carries MCP messages, and a stray
    // log line there would corrupt the stream. try_init because tests may
    // have installed a subscriber already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

async fn run() -> Result<i32> {
    // Handles --help/--version and exits on bad arguments
    let cli = Cli::parse();

    // Flags become an immutable config; nothing below reads the CLI again
    let config = FinderConfig::default()
        .with_source_url(cli.source_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    // One finder (one pooled HTTP client) for the whole process
    let finder = SolutionFinder::new(&config)?;

    // No subcommand means serve: that's how agent hosts launch us
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            server::serve_stdio(finder).await?;
            Ok(0)
        }
        Commands::Find { challenge, json } => handle_find(&finder, &challenge, json).await,
    }
}

// Handles the 'find' subcommand. Ctrl-C cancels the request in flight.
async fn handle_find(finder: &SolutionFinder, challenge: &str, json: bool) -> Result<i32> {
    let cancel = CancellationToken::new();

    // Clones share state: cancelling this one cancels `cancel` too
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, cancelling lookup");
            on_interrupt.cancel();
        }
    });

    let found = finder.find(challenge, &cancel).await?;

    // Links go to stdout, messages to stderr, so `find` output pipes cleanly
    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else if found.solutions.is_empty() {
        eprintln!("No shared solutions found for '{}'", challenge.trim());
    } else {
        for link in &found.solutions {
            println!("{}", link);
        }
    }

    // Like grep: 1 means "ran fine, nothing matched"
    if found.solutions.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}
