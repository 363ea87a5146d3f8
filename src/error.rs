// src/error.rs
// =============================================================================
// Every way a lookup can fail.
//
// There are five kinds of failure and callers can always tell them apart:
// - InvalidInput: the challenge name is empty (or absurdly long)
// - InvalidRequest: the source URL can't be turned into a GET request
// - TransportFailure: DNS, connection, timeout, or body-read problems
// - RemoteFailure: the server answered with a non-success status
// - Cancelled: the caller gave up while the request was in flight
//
// Nothing here recovers from anything. Errors travel up to the caller
// with their kind intact.
//
// Rust concepts:
// - thiserror: Derives Display and std::error::Error from attributes
// - #[source]: Keeps the underlying reqwest error reachable
// =============================================================================

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

// Result alias used throughout the library modules
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The challenge name failed validation; no request was made
    #[error("invalid challenge name: {reason}")]
    InvalidInput { reason: String },

    /// The URL could not be built into a request
    #[error("invalid request for '{url}': {reason}")]
    InvalidRequest { url: String, reason: String },

    /// The request did not finish within the configured bound
    #[error("GET {url}: timed out after {}s", .timeout.as_secs_f64())]
    Timeout { url: String, timeout: Duration },

    /// DNS, connect, or body-read failure
    #[error("GET {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status; `body` holds at most 8 KiB of the response
    #[error("GET {url}: status {status}: {body}")]
    Remote {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The caller's cancellation token fired mid-request
    #[error("GET {url}: cancelled")]
    Cancelled { url: String },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidRequest,
    TransportFailure,
    RemoteFailure,
    Cancelled,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Error::Timeout { .. } | Error::Transport { .. } => ErrorKind::TransportFailure,
            Error::Remote { .. } => ErrorKind::RemoteFailure,
            Error::Cancelled { .. } => ErrorKind::Cancelled,
        }
    }

    /// True when the failure was the fetch timeout rather than another
    /// transport problem
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_request(url: &str, reason: impl fmt::Display) -> Self {
        Error::InvalidRequest {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::InvalidRequest => "InvalidRequest",
            ErrorKind::TransportFailure => "TransportFailure",
            ErrorKind::RemoteFailure => "RemoteFailure",
            ErrorKind::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}
