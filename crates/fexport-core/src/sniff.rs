//! Magic-number detection of well-known binary formats.

/// Number of leading bytes inspected.
pub const SNIFF_LEN: usize = 8;

/// Signatures checked in order; the first prefix match wins.
/// Any ZIP local-file header is reported as `xlsx` (OOXML office formats are ZIP containers).
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF", "pdf"),
    (&[0x50, 0x4B, 0x03, 0x04], "xlsx"),
    (&[0x89, 0x50, 0x4E, 0x47], "png"),
    (&[0xFF, 0xD8, 0xFF], "jpg"),
    (&[0x47, 0x49, 0x46, 0x38], "gif"),
];

/// Identifies a payload by its leading bytes.
///
/// Only the first [`SNIFF_LEN`] bytes are looked at. Input shorter than a
/// signature simply does not match that signature; `None` means "unknown".
pub fn sniff(bytes: &[u8]) -> Option<&'static str> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    SIGNATURES
        .iter()
        .find(|(magic, _)| head.starts_with(magic))
        .map(|(_, ext)| *ext)
}
