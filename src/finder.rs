// src/finder.rs
// =============================================================================
// This module answers one question: "who has shared a solution to X?"
//
// What happens per call:
// 1. Validate the challenge name (not empty once trimmed)
// 2. Compile the matcher for it (still no network)
// 3. Fetch the solutions document
// 4. Extract the matching links and wrap them in Solutions
//
// Any error from steps 1-3 is returned as-is, so the caller still sees
// its ErrorKind. Zero matches is a normal, empty answer.
//
// The finder holds no per-call state. It is Clone and safe to share
// between concurrent lookups.
// =============================================================================

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::FinderConfig;
use crate::error::{Error, Result};
use crate::extract::SolutionMatcher;
use crate::source::Fetcher;

/// Links to shared solutions, in the order the document lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solutions {
    /// The solutions found (empty when there are none)
    pub solutions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SolutionFinder {
    fetcher: Fetcher,
    source_url: String,
}

impl SolutionFinder {
    // Builds the finder (and its HTTP client) once; reuse it for every lookup
    pub fn new(config: &FinderConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            source_url: config.source_url.clone(),
        })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    // Looks up every shared solution for one challenge
    //
    // Parameters:
    //   challenge: free-text name, e.g. "wc tool" (surrounding spaces ignored)
    //   cancel: fires when the caller no longer wants the answer
    //
    // Returns: Solutions in document order, or the first Error hit
    pub async fn find(&self, challenge: &str, cancel: &CancellationToken) -> Result<Solutions> {
        // Reject blank names before anything touches the network
        let challenge = validate_challenge(challenge)?;

        // Compile the pattern up front too, so a bad pattern never costs a fetch
        let matcher = SolutionMatcher::new(challenge)?;

        debug!(challenge, source = %self.source_url, "looking up solutions");

        // The only await point; the `?` hands fetch errors back unchanged
        let document = self.fetcher.fetch(&self.source_url, cancel).await?;

        // Pure and infallible: no matches just means an empty Vec
        let solutions = matcher.extract(&document);
        info!(challenge, count = solutions.len(), "lookup finished");

        Ok(Solutions { solutions })
    }
}

// Returns the trimmed challenge name, or InvalidInput
pub fn validate_challenge(challenge: &str) -> Result<&str> {
    // "  wc tool " and "wc tool" are the same challenge
    let trimmed = challenge.trim();

    // Empty is the only invalid name; any other text is matched literally
    if trimmed.is_empty() {
        return Err(Error::invalid_input("Coding Challenge name cannot be empty"));
    }

    Ok(trimmed)
}
