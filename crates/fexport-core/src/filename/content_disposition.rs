//! Content-Disposition header parsing (filename and filename*).

use thiserror::Error;

const EXTENDED_PARAM: &str = "filename*=utf-8''";
const PLAIN_PARAM: &str = "filename=";

/// Why a percent-encoded filename could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` not followed by two hex digits.
    #[error("malformed percent-escape at byte {0}")]
    MalformedEscape(usize),
    /// Decoded bytes are not valid UTF-8.
    #[error("decoded filename is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Extracts a filename hint from a raw Content-Disposition header value.
///
/// - `filename*=UTF-8''<percent-encoded>` wins when it decodes cleanly. A bad
///   encoding is not an error; parsing falls through to `filename=`.
/// - `filename=<value>`, optionally in single or double quotes, ends at `;`
///   or a closing quote. The value is percent-decoded when possible and
///   returned raw otherwise.
///
/// Parameter names match case-insensitively. `None` or an empty header
/// yields `None`.
pub fn extract_filename(header_value: Option<&str>) -> Option<String> {
    let header = header_value.filter(|h| !h.is_empty())?;
    // ASCII lowercasing keeps byte offsets aligned with `header`.
    let lower = header.to_ascii_lowercase();

    if let Some(encoded) = param_value(header, &lower, EXTENDED_PARAM) {
        let encoded = encoded.split(';').next().unwrap_or_default();
        if !encoded.is_empty() {
            match percent_decode(encoded) {
                Ok(decoded) => return Some(decoded),
                Err(e) => tracing::debug!("ignoring undecodable filename*: {}", e),
            }
        }
    }

    let raw = param_value(header, &lower, PLAIN_PARAM)?;
    let raw = raw.strip_prefix(['"', '\'']).unwrap_or(raw);
    let end = raw.find(['"', '\'', ';']).unwrap_or(raw.len());
    let value = &raw[..end];
    if value.is_empty() {
        return None;
    }
    Some(percent_decode(value).unwrap_or_else(|_| value.to_string()))
}

/// Returns the slice of `header` following the first occurrence of `param`
/// (matched against the lowercased copy).
fn param_value<'a>(header: &'a str, lower: &str, param: &str) -> Option<&'a str> {
    lower.find(param).map(|i| &header[i + param.len()..])
}

/// Strict percent-decoding: every `%` must start a two-digit hex escape and
/// the resulting bytes must be UTF-8. `+` is left alone.
pub(crate) fn percent_decode(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let high = bytes.get(i + 1).copied().and_then(hex_digit);
            let low = bytes.get(i + 2).copied().and_then(hex_digit);
            match (high, low) {
                (Some(high), Some(low)) => out.push(high << 4 | low),
                _ => return Err(DecodeError::MalformedEscape(i)),
            }
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(String::from_utf8(out)?)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty() {
        assert_eq!(extract_filename(None), None);
        assert_eq!(extract_filename(Some("")), None);
        assert_eq!(extract_filename(Some("inline")), None);
    }

    #[test]
    fn parse_quoted() {
        let r = extract_filename(Some("attachment; filename=\"report.pdf\""));
        assert_eq!(r.as_deref(), Some("report.pdf"));
    }

    #[test]
    fn parse_single_quoted() {
        let r = extract_filename(Some("attachment; filename='report.pdf'"));
        assert_eq!(r.as_deref(), Some("report.pdf"));
    }

    #[test]
    fn parse_token() {
        let r = extract_filename(Some("attachment; filename=report.pdf; size=10"));
        assert_eq!(r.as_deref(), Some("report.pdf"));
    }

    #[test]
    fn parse_filename_star_utf8() {
        let r = extract_filename(Some(
            "attachment; filename*=UTF-8''%E6%96%87%E6%A1%A3.pdf",
        ));
        assert_eq!(r.as_deref(), Some("文档.pdf"));
    }

    #[test]
    fn parse_filename_star_precedence() {
        let r = extract_filename(Some(
            "attachment; filename=\"fallback.bin\"; filename*=UTF-8''real%20name.dat",
        ));
        assert_eq!(r.as_deref(), Some("real name.dat"));
    }

    #[test]
    fn parameter_names_case_insensitive() {
        assert_eq!(
            extract_filename(Some("attachment; FileName=\"a.txt\"")).as_deref(),
            Some("a.txt")
        );
        assert_eq!(
            extract_filename(Some("attachment; FILENAME*=utf-8''b%2Etxt")).as_deref(),
            Some("b.txt")
        );
    }

    #[test]
    fn filename_star_ends_at_semicolon() {
        let r = extract_filename(Some("attachment; filename*=UTF-8''x.csv; creation-date=1"));
        assert_eq!(r.as_deref(), Some("x.csv"));
    }

    #[test]
    fn bad_filename_star_falls_through_to_plain() {
        let r = extract_filename(Some(
            "attachment; filename*=UTF-8''%E6%96; filename=\"plain.txt\"",
        ));
        assert_eq!(r.as_deref(), Some("plain.txt"));
    }

    #[test]
    fn bad_filename_star_without_plain_is_none() {
        assert_eq!(extract_filename(Some("attachment; filename*=UTF-8''%ZZ")), None);
    }

    #[test]
    fn plain_value_is_percent_decoded() {
        let r = extract_filename(Some("attachment; filename=\"%E6%8A%A5%E8%A1%A8.xlsx\""));
        assert_eq!(r.as_deref(), Some("报表.xlsx"));
    }

    #[test]
    fn plain_value_kept_raw_when_undecodable() {
        let r = extract_filename(Some("attachment; filename=\"100%.txt\""));
        assert_eq!(r.as_deref(), Some("100%.txt"));
    }

    #[test]
    fn strict_decoder() {
        assert_eq!(percent_decode("a%20b+c").unwrap(), "a b+c");
        assert_eq!(percent_decode("%4"), Err(DecodeError::MalformedEscape(0)));
        assert!(matches!(
            percent_decode("%FF%FE"),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }
}
