//! HTTP transport seam.
//!
//! The core only needs raw body bytes and response headers from a fetch.
//! [`CurlTransport`] is the libcurl-backed implementation; tests and hosts
//! can supply their own [`Transport`].

mod curl_transport;
mod error;
mod parse;

pub use curl_transport::CurlTransport;
pub use error::TransportError;
pub use parse::parse_header_lines;

use crate::options::{DownloadOptions, TransportOverrides};
use std::collections::HashMap;

/// Response headers keyed by lowercased name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    inner: HashMap<String, String>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header; a later value for the same name replaces the earlier one.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.inner.insert(name.trim().to_ascii_lowercase(), value.into());
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.get("content-type")
    }

    pub fn content_disposition(&self) -> Option<&str> {
        self.get("content-disposition")
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ResponseHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (k, v) in iter {
            headers.insert(k.as_ref(), v);
        }
        headers
    }
}

/// Body and headers of a successful fetch.
#[derive(Debug, Clone, Default)]
pub struct ResponsePayload {
    pub bytes: Vec<u8>,
    pub headers: ResponseHeaders,
}

/// A fully prepared request: query already applied, body already encoded.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub overrides: TransportOverrides,
}

impl HttpRequest {
    /// Builds a request from export options.
    ///
    /// `params` are appended to any query already in `url`. A JSON string in
    /// `data` is sent verbatim; other JSON values are serialized and get a
    /// `Content-Type: application/json` header unless one is already set.
    pub fn from_options(url: &str, options: &DownloadOptions) -> Result<Self, TransportError> {
        let mut parsed = url::Url::parse(url).map_err(|source| TransportError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if !options.params.is_empty() {
            parsed.query_pairs_mut().extend_pairs(options.params.iter());
        }

        let method = match options.method.trim() {
            "" => "GET".to_string(),
            m => m.to_ascii_uppercase(),
        };

        let mut headers = options.headers.clone();
        let body = match &options.data {
            None => None,
            Some(serde_json::Value::String(s)) => Some(s.clone().into_bytes()),
            Some(value) => {
                let has_content_type = headers
                    .keys()
                    .any(|k| k.trim().eq_ignore_ascii_case("content-type"));
                if !has_content_type {
                    headers.insert("Content-Type".to_string(), "application/json".to_string());
                }
                Some(serde_json::to_vec(value)?)
            }
        };

        Ok(Self {
            url: parsed.into(),
            method,
            headers,
            body,
            overrides: options.transport.clone(),
        })
    }
}

/// Performs one blocking HTTP exchange.
///
/// Implementations must treat non-2xx responses as errors. Called from
/// `spawn_blocking`, so they may block freely.
pub trait Transport: Send + Sync {
    fn fetch(&self, request: &HttpRequest) -> Result<ResponsePayload, TransportError>;
}
