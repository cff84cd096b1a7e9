//! MIME type to file extension registry.
//!
//! The table is built once on first use and never mutated afterwards, so it
//! can be shared by any number of concurrent export calls.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Extension used when the MIME type is missing or not in the table.
pub const FALLBACK_EXTENSION: &str = "bin";

/// Normalized MIME type (lowercase, no parameters) → extension.
const MIME_TABLE: &[(&str, &str)] = &[
    // Documents
    ("application/pdf", "pdf"),
    ("application/msword", "doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "docx",
    ),
    ("application/vnd.ms-excel", "xls"),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xlsx",
    ),
    ("application/vnd.ms-powerpoint", "ppt"),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "pptx",
    ),
    // Archives
    ("application/zip", "zip"),
    ("application/x-rar-compressed", "rar"),
    ("application/x-7z-compressed", "7z"),
    ("application/gzip", "gz"),
    ("application/x-tar", "tar"),
    // Images
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/bmp", "bmp"),
    ("image/webp", "webp"),
    ("image/svg+xml", "svg"),
    ("image/tiff", "tiff"),
    // Text and data
    ("text/plain", "txt"),
    ("text/html", "html"),
    ("text/css", "css"),
    ("text/javascript", "js"),
    ("application/javascript", "js"),
    ("application/json", "json"),
    ("text/xml", "xml"),
    ("application/xml", "xml"),
    ("text/csv", "csv"),
    // Audio and video
    ("audio/mpeg", "mp3"),
    ("audio/wav", "wav"),
    ("video/mp4", "mp4"),
    ("video/mpeg", "mpeg"),
    ("video/quicktime", "mov"),
    ("video/x-msvideo", "avi"),
    // Generic binary
    ("application/octet-stream", "bin"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| MIME_TABLE.iter().copied().collect())
}

/// Strips `;`-delimited parameters, trims and lowercases a MIME type.
///
/// `"Application/JSON; charset=utf-8"` → `"application/json"`.
pub fn normalize_mime(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Returns the canonical extension for `mime_type`, or [`FALLBACK_EXTENSION`]
/// when the type is absent or unknown.
pub fn extension_for(mime_type: Option<&str>) -> &'static str {
    let Some(mime_type) = mime_type else {
        return FALLBACK_EXTENSION;
    };
    table()
        .get(normalize_mime(mime_type).as_str())
        .copied()
        .unwrap_or(FALLBACK_EXTENSION)
}
