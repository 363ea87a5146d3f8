// src/lib.rs
// =============================================================================
// Finds community solutions to Coding Challenges.
//
// The solutions index is a markdown file of rows like
//   - [Build your own wc tool](https://github.com/someone/wc) by Someone
// and a lookup returns every link whose text starts with
// "Build your own <challenge>", in document order.
//
// Modules:
// - config: where to fetch from and how long to wait
// - source: HTTP fetch with timeout and cancellation
// - extract: pure text -> links matching
// - finder: validate, fetch, extract
// - server: the MCP tool wrapped around the finder
// - error: the error taxonomy shared by all of the above
// =============================================================================

pub mod config;
pub mod error;
pub mod extract;
pub mod finder;
pub mod server;
pub mod source;

pub use config::FinderConfig;
pub use error::{Error, ErrorKind, Result};
pub use finder::{SolutionFinder, Solutions};
