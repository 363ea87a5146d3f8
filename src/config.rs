// src/config.rs
// =============================================================================
// Process-wide settings for a lookup: where the solutions document lives
// and how long we are willing to wait for it.
//
// The config is built once (from CLI flags in main.rs, or Default in tests)
// and handed to the Fetcher/SolutionFinder. Nothing reads globals.
// =============================================================================

use std::time::Duration;

/// Raw README of the Coding Challenges shared solutions repository
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/CodingChallengesFYI/SharedSolutions/refs/heads/main/README.md";

/// Upper bound on the whole fetch (connect + headers + body)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// URL of the markdown document to search
    pub source_url: String,
    /// Wall-clock limit for one fetch
    pub timeout: Duration,
    /// Sent as the User-Agent header
    pub user_agent: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FinderConfig {
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
