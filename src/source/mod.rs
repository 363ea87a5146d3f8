// src/source/mod.rs
// =============================================================================
// This module fetches the raw solutions document over HTTP.
//
// The only public piece is the Fetcher: build it once from a FinderConfig,
// then call fetch() as many times as you like (it is Clone and holds no
// per-call state).
// =============================================================================

mod fetch;

pub use fetch::{Fetcher, ERROR_BODY_LIMIT};
