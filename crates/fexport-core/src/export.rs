//! One-shot export: fetch, name, persist.
//!
//! The fetch is the only suspension point; it runs on the blocking pool.
//! Resolution and the sink write happen synchronously afterwards. Errors
//! never escape [`Exporter::export_file`]; they become a failed
//! [`ExportResult`].

use crate::filename::{self, NameSource};
use crate::mime::extension_for;
use crate::options::{DownloadOptions, ExportResult};
use crate::sink::{FileSystemSink, Sink};
use crate::sniff::sniff;
use crate::transport::{CurlTransport, HttpRequest, ResponsePayload, Transport, TransportError};
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Directory used by [`export_file`].
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";

/// Any failure of a single export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("failed to save file: {0}")]
    Sink(#[from] std::io::Error),
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Exports URLs through a transport into a sink. Cheap to clone; calls share
/// no mutable state.
#[derive(Clone)]
pub struct Exporter {
    transport: Arc<dyn Transport>,
    sink: Arc<dyn Sink>,
}

impl Exporter {
    pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn Sink>) -> Self {
        Self { transport, sink }
    }

    /// libcurl transport with defaults, saving under `dir`.
    pub fn to_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(
            Arc::new(CurlTransport::default()),
            Arc::new(FileSystemSink::new(dir)),
        )
    }

    /// Fetches `url` and hands the body to the sink under a resolved name.
    pub async fn export_file(&self, url: &str, options: &DownloadOptions) -> ExportResult {
        tracing::info!(url, method = %options.method, "export started");
        match self.try_export(url, options).await {
            Ok((filename, filepath)) => {
                let message = match &filepath {
                    Some(path) => format!("file saved to {}", path.display()),
                    None => format!("download triggered: {}", filename),
                };
                tracing::info!(url, filename = %filename, "export finished");
                ExportResult::succeeded(filename, filepath, message)
            }
            Err(e) => {
                tracing::warn!(url, "export failed: {}", e);
                ExportResult::failed(e.to_string())
            }
        }
    }

    async fn try_export(
        &self,
        url: &str,
        options: &DownloadOptions,
    ) -> Result<(String, Option<PathBuf>), ExportError> {
        let request = HttpRequest::from_options(url, options)?;
        let transport = Arc::clone(&self.transport);
        let payload: ResponsePayload =
            tokio::task::spawn_blocking(move || transport.fetch(&request)).await??;

        let (filename, source) =
            filename::resolve_at(options, &payload.headers, &payload.bytes, &Local::now());
        tracing::debug!(filename = %filename, ?source, "resolved filename");
        if source != NameSource::ContentDisposition {
            note_sniff_mismatch(&payload);
        }

        let filepath = self.sink.persist(&filename, &payload.bytes)?;
        Ok((filename, filepath))
    }
}

/// Logs when the body's magic bytes disagree with the declared content type.
/// Informational only: sniffing never changes the resolved name.
fn note_sniff_mismatch(payload: &ResponsePayload) {
    let declared = extension_for(payload.headers.content_type());
    if let Some(sniffed) = sniff(&payload.bytes) {
        if sniffed != declared {
            tracing::debug!(declared, sniffed, "content type and body signature disagree");
        }
    }
}

/// Exports `url` into `downloads/` with the default libcurl transport.
pub async fn export_file(url: &str, options: &DownloadOptions) -> ExportResult {
    Exporter::to_dir(DEFAULT_DOWNLOAD_DIR)
        .export_file(url, options)
        .await
}
