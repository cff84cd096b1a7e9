//! Fetch a URL and save the response body under an automatically chosen name.
//!
//! ```no_run
//! # async fn demo() {
//! use fexport_core::{export_file, DownloadOptions};
//!
//! let result = export_file(
//!     "https://example.com/report",
//!     &DownloadOptions::default().with_filename("custom-document"),
//! )
//! .await;
//! println!("{} -> {:?}", result.filename, result.filepath);
//! # }
//! ```

pub mod config;
pub mod logging;

pub mod export;
pub mod filename;
pub mod mime;
pub mod options;
pub mod sink;
pub mod sniff;
pub mod timestamp;
pub mod transport;

pub use export::{export_file, ExportError, Exporter};
pub use options::{DownloadOptions, ExportResult, TransportOverrides};
