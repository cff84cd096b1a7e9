//! Parse raw HTTP response header lines into [`ResponseHeaders`].

use super::ResponseHeaders;

/// Parses header lines as collected from libcurl's header callback.
///
/// A status line (`HTTP/...`) starts a new response, discarding headers seen
/// so far, so only the final response of a redirect chain is kept.
pub fn parse_header_lines<S: AsRef<str>>(lines: &[S]) -> ResponseHeaders {
    let mut headers = ResponseHeaders::new();
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers = ResponseHeaders::new();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name, value.trim());
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_content_headers() {
        let lines = [
            "HTTP/1.1 200 OK",
            "Content-Type: application/pdf",
            "Content-Disposition: attachment; filename=\"report.pdf\"",
            "Content-Length: 12345",
        ];
        let h = parse_header_lines(&lines);
        assert_eq!(h.content_type(), Some("application/pdf"));
        assert_eq!(
            h.content_disposition(),
            Some("attachment; filename=\"report.pdf\"")
        );
        assert_eq!(h.get("content-length"), Some("12345"));
    }

    #[test]
    fn value_may_contain_colons() {
        let h = parse_header_lines(&["Location: http://example.com:8080/x"]);
        assert_eq!(h.get("location"), Some("http://example.com:8080/x"));
    }

    #[test]
    fn redirect_chain_keeps_final_response() {
        let lines = [
            "HTTP/1.1 302 Found",
            "Location: /real",
            "Content-Type: text/html",
            "",
            "HTTP/1.1 200 OK",
            "Content-Type: text/csv",
        ];
        let h = parse_header_lines(&lines);
        assert_eq!(h.content_type(), Some("text/csv"));
        assert_eq!(h.get("location"), None);
    }

    #[test]
    fn malformed_lines_ignored() {
        let h = parse_header_lines(&["garbage", "", "X-Ok: 1"]);
        assert_eq!(h.len(), 1);
    }
}
