// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// With no subcommand we run as an MCP server on stdio, which is how agent
// hosts launch us. `find` does one lookup from a terminal.
// =============================================================================

use clap::{Parser, Subcommand};

use challenge_finder::config::DEFAULT_SOURCE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "challenge-finder",
    version,
    about = "Find shared solutions to Coding Challenges",
    long_about = "challenge-finder searches the Coding Challenges Shared Solutions index for \
                  links to solutions of a given challenge. Run without a subcommand to serve \
                  the CodingChallengesSolutionFinder tool over MCP on stdin/stdout."
)]
pub struct Cli {
    /// URL of the markdown solutions index
    #[arg(long, global = true, default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Seconds to wait for the index before giving up
    #[arg(
        long,
        global = true,
        default_value_t = 15,
        value_parser = clap::value_parser!(u64).range(1..=600)
    )]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the CodingChallengesSolutionFinder tool over MCP on stdio (default)
    Serve,

    /// Look up solutions for one challenge and print them
    ///
    /// Example: challenge-finder find "wc tool"
    Find {
        /// Challenge name, e.g. "wc tool" or "JSON Parser"
        challenge: String,

        /// Print {"solutions": [...]} instead of one link per line
        #[arg(long)]
        json: bool,
    },
}
