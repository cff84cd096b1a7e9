//! Filename resolution for exported payloads.
//!
//! Precedence, first match wins:
//! 1. explicit `options.filename` (its own extension is authoritative;
//!    otherwise the content-type extension is appended),
//! 2. the Content-Disposition filename, used verbatim,
//! 3. a timestamp (or `download`) plus the content-type extension.
//!
//! Byte sniffing is deliberately not part of this chain; see [`crate::sniff`].

mod content_disposition;
mod sanitize;

pub use content_disposition::{extract_filename, DecodeError};
pub use sanitize::sanitize_for_disk;

use crate::mime::extension_for;
use crate::options::DownloadOptions;
use crate::timestamp;
use crate::transport::ResponseHeaders;
use chrono::{DateTime, Local};

/// Base name used when timestamps are disabled.
pub const DEFAULT_BASENAME: &str = "download";

/// Which precedence branch produced a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Explicit,
    ContentDisposition,
    Timestamp,
    Default,
}

/// Resolves the filename for a response using the current local time.
pub fn resolve(options: &DownloadOptions, headers: &ResponseHeaders, bytes: &[u8]) -> String {
    resolve_at(options, headers, bytes, &Local::now()).0
}

/// Same as [`resolve`] with a fixed instant, also reporting the branch taken.
///
/// `_bytes` is accepted for signature parity with the transport payload; the
/// body does not influence the name.
pub fn resolve_at(
    options: &DownloadOptions,
    headers: &ResponseHeaders,
    _bytes: &[u8],
    now: &DateTime<Local>,
) -> (String, NameSource) {
    let content_ext = extension_for(headers.content_type());

    if let Some(name) = options.filename.as_deref().filter(|n| !n.is_empty()) {
        let name = if has_extension(name) {
            name.to_string()
        } else {
            format!("{}.{}", name, content_ext)
        };
        return (name, NameSource::Explicit);
    }

    if let Some(name) = extract_filename(headers.content_disposition()) {
        return (name, NameSource::ContentDisposition);
    }

    let (base, source) = if options.use_timestamp {
        (
            timestamp::format_at(&options.timestamp_format, now),
            NameSource::Timestamp,
        )
    } else {
        (DEFAULT_BASENAME.to_string(), NameSource::Default)
    };
    (format!("{}.{}", base, content_ext), source)
}

/// True when `name` ends in `.` followed by one or more ASCII alphanumerics.
pub fn has_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()),
        None => false,
    }
}
