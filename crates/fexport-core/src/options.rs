//! Per-call export options and the export result.

use crate::timestamp::DEFAULT_TIMESTAMP_FORMAT;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Transport-specific settings passed through untouched by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOverrides {
    pub connect_timeout: Option<Duration>,
    /// Whole-request timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,
    pub follow_redirects: Option<bool>,
    pub max_redirections: Option<u32>,
    pub user_agent: Option<String>,
}

/// What to request and how to name the result. Built per call.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// URL query parameters, appended in order.
    pub params: Vec<(String, String)>,
    /// Request body. A JSON string is sent as-is; anything else as JSON.
    pub data: Option<serde_json::Value>,
    /// HTTP method, `GET` by default.
    pub method: String,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
    /// Explicit filename, with or without an extension.
    pub filename: Option<String>,
    /// Name generated files after the current time instead of `download`.
    pub use_timestamp: bool,
    pub timestamp_format: String,
    pub transport: TransportOverrides,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            params: Vec::new(),
            data: None,
            method: "GET".to_string(),
            headers: HashMap::new(),
            filename: None,
            use_timestamp: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            transport: TransportOverrides::default(),
        }
    }
}

impl DownloadOptions {
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_timestamp(mut self, use_timestamp: bool) -> Self {
        self.use_timestamp = use_timestamp;
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

/// Outcome of one export call. Failures are reported here, never as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportResult {
    pub success: bool,
    /// Resolved filename; empty on failure.
    pub filename: String,
    /// Where the bytes were written, for filesystem sinks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ExportResult {
    pub fn succeeded(filename: String, filepath: Option<PathBuf>, message: String) -> Self {
        Self {
            success: true,
            filename,
            filepath,
            message: Some(message),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: String::new(),
            filepath: None,
            message: Some(message.into()),
        }
    }
}
