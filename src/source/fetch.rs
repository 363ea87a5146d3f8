// src/source/fetch.rs
// =============================================================================
// This module downloads the solutions document.
//
// Strategy:
// - One reqwest Client per Fetcher, reused for every call (connection pool)
// - No cookie store, so nothing from one call leaks into the next
// - A single GET per call with "Accept: text/plain", never retried
// - The client-wide timeout bounds connect + headers + body
// - The caller's CancellationToken races the request; if it fires first,
//   the request future is dropped, which closes the connection
//
// Error responses are read only up to ERROR_BODY_LIMIT bytes so a huge
// error page can't eat memory.
//
// Rust concepts:
// - tokio::select!: Waits on several futures, finishes with the first one
// - Dropping a future cancels it (no explicit abort call needed)
// =============================================================================

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Request, Response};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::config::FinderConfig;
use crate::error::{Error, Result};

/// Most bytes of a non-success response body kept for diagnostics
pub const ERROR_BODY_LIMIT: usize = 8 * 1024;

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(config: &FinderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::invalid_request(&config.source_url, e))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    // Fetches `url` and returns the body as text
    //
    // Parameters:
    //   url: absolute http(s) URL
    //   cancel: fires when the caller no longer wants the answer
    //
    // Returns: the whole body on a 2xx status, otherwise an Error whose
    // kind tells the caller what went wrong
    pub async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<String> {
        let request = self.build_request(url)?;

        tokio::select! {
            // Check the token first so an already-cancelled call never
            // touches the network
            biased;

            _ = cancel.cancelled() => {
                warn!(url, "fetch cancelled by caller");
                Err(Error::Cancelled { url: url.to_string() })
            }
            result = self.send(url, request) => result,
        }
    }

    fn build_request(&self, url: &str) -> Result<Request> {
        let parsed = Url::parse(url).map_err(|e| Error::invalid_request(url, e))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_request(
                url,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        self.client
            .get(parsed)
            .header(ACCEPT, "text/plain")
            .build()
            .map_err(|e| Error::invalid_request(url, e))
    }

    async fn send(&self, url: &str, request: Request) -> Result<String> {
        debug!(url, "GET");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped(response, ERROR_BODY_LIMIT).await;
            warn!(url, %status, "source returned an error status");
            return Err(Error::Remote {
                url: url.to_string(),
                status,
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        debug!(url, bytes = text.len(), "fetched document");
        Ok(text)
    }

    fn transport_error(&self, url: &str, source: reqwest::Error) -> Error {
        if source.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            Error::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

// Reads at most `limit` bytes of the body, chunk by chunk. A failure part
// way through just ends the read; the status is the real error here.
async fn read_capped(mut response: Response, limit: usize) -> String {
    let mut buf: Vec<u8> = Vec::new();

    while buf.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = (limit - buf.len()).min(chunk.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, "stopped reading error body");
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why build the Request before select!?
//    - A bad URL is the caller's mistake, not a network problem
//    - Building first means InvalidRequest comes back even if the token
//      is already cancelled, and no socket is ever opened for it
//
// 2. Why `biased;`?
//    - select! normally picks a random ready branch
//    - biased polls top to bottom, so cancellation always wins a tie
//
// 3. What does response.chunk() do?
//    - Yields the body piece by piece as Bytes
//    - Lets us stop reading once we have enough, instead of .text()
//      which would buffer the whole thing
// -----------------------------------------------------------------------------
