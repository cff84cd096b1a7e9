//! Transport error type.

use thiserror::Error;

/// Why a fetch produced no usable response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Body(#[from] serde_json::Error),
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("{method} {url} returned HTTP {status}")]
    Http {
        method: String,
        url: String,
        status: u32,
    },
}

impl TransportError {
    /// HTTP status code, when the server answered with a non-2xx response.
    pub fn status(&self) -> Option<u32> {
        match self {
            TransportError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
