// src/extract/mod.rs
// =============================================================================
// This module finds solution links inside the fetched document.
//
// Everything here is pure: text in, links out. No I/O, so it is tested
// without a network.
// =============================================================================

mod markdown;

pub use markdown::{escape_challenge, extract_solution_links, SolutionMatcher};
