// src/extract/markdown.rs
// =============================================================================
// This module pulls solution links for one challenge out of markdown text.
//
// The solutions index is a flat list of rows like:
//   - [Build your own wc tool](https://github.com/someone/wc) by Someone
//
// We don't parse markdown here. A single case-insensitive regex finds every
// link whose anchor text starts with "build your own <challenge>" and
// captures its target:
//
//   \[ \s* build your own <challenge> .*? \s* \] \( \s* (target) \s* title? \)
//
// The challenge is user input, so it is escaped first (escape_challenge).
// "C++" must match the text "C++", not "one or more C's".
//
// Rust concepts:
// - regex::escape: Turns any string into a pattern that matches it literally
// - captures_iter: Walks all non-overlapping matches from left to right
// - filter_map: Maps and drops the Nones in one pass
// =============================================================================

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

// Escapes every regex metacharacter in the challenge name
//
// Example:
//   "C++ (parser)" -> "C\+\+ \(parser\)"
pub fn escape_challenge(challenge: &str) -> String {
    regex::escape(challenge)
}

// Builds the full link pattern around an already-escaped challenge
fn solution_pattern(escaped_challenge: &str) -> String {
    format!(
        r"\[\s*build your own {escaped_challenge}.*?\s*\]\(\s*([^) \t\r\n]+)\s*(?:[^)]*)\)"
    )
}

/// Compiled matcher for one challenge name.
#[derive(Debug, Clone)]
pub struct SolutionMatcher {
    pattern: Regex,
}

impl SolutionMatcher {
    pub fn new(challenge: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&solution_pattern(&escape_challenge(challenge)))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::invalid_input(e.to_string()))?;

        Ok(Self { pattern })
    }

    // Returns every matching link target in document order
    //
    // Duplicates are kept: a link listed twice comes back twice.
    // No matches gives an empty Vec.
    pub fn extract(&self, document: &str) -> Vec<String> {
        self.pattern
            .captures_iter(document)
            .filter_map(|caps| caps.get(1))
            .map(|target| target.as_str().trim().to_string())
            .collect()
    }
}

// One-shot helper: compile a matcher for `challenge` and run it over `document`
pub fn extract_solution_links(document: &str, challenge: &str) -> Result<Vec<String>> {
    Ok(SolutionMatcher::new(challenge)?.extract(document))
}
