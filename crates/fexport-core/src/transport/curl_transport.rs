//! libcurl-backed transport: one buffered request per fetch.

use super::{parse_header_lines, HttpRequest, ResponsePayload, Transport, TransportError};
use crate::config::ExportConfig;
use std::borrow::Cow;
use std::str;
use std::time::Duration;

/// Transport defaults; per-request [`TransportOverrides`](crate::options::TransportOverrides) win.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub follow_redirects: bool,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(300),
            follow_redirects: true,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

impl CurlTransport {
    pub fn from_config(cfg: &ExportConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            follow_redirects: true,
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone(),
        }
    }

    fn configure(
        &self,
        easy: &mut curl::easy::Easy,
        request: &HttpRequest,
    ) -> Result<(), curl::Error> {
        let o = &request.overrides;
        easy.url(&request.url)?;
        easy.follow_location(o.follow_redirects.unwrap_or(self.follow_redirects))?;
        easy.max_redirections(o.max_redirections.unwrap_or(self.max_redirections))?;
        easy.connect_timeout(o.connect_timeout.unwrap_or(self.connect_timeout))?;
        easy.timeout(o.timeout.unwrap_or(self.timeout))?;
        if let Some(ua) = o.user_agent.as_ref().or(self.user_agent.as_ref()) {
            easy.useragent(ua)?;
        }

        match request.method.as_str() {
            "GET" if request.body.is_none() => easy.get(true)?,
            "HEAD" => easy.nobody(true)?,
            "POST" => easy.post(true)?,
            other => easy.custom_request(other)?,
        }
        match &request.body {
            Some(body) => easy.post_fields_copy(body)?,
            // Empty POST: Content-Length 0, not a chunked upload from a read callback.
            None if request.method == "POST" => easy.post_field_size(0)?,
            None => {}
        }

        // Build curl list for custom headers (e.g. "Name: value").
        if !request.headers.is_empty() {
            let mut list = curl::easy::List::new();
            for (k, v) in &request.headers {
                list.append(&format!("{}: {}", k.trim(), v.trim()))?;
            }
            easy.http_headers(list)?;
        }
        Ok(())
    }
}

/// Header bytes as text. UTF-8 when valid, otherwise ISO-8859-1 (each byte
/// maps to the code point of the same value), so no header line is dropped.
fn decode_header_line(data: &[u8]) -> Cow<'_, str> {
    match str::from_utf8(data) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(data.iter().map(|&b| char::from(b)).collect()),
    }
}

impl Transport for CurlTransport {
    fn fetch(&self, request: &HttpRequest) -> Result<ResponsePayload, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        self.configure(&mut easy, request)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                header_lines.push(decode_header_line(data).trim_end().to_string());
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(TransportError::Http {
                method: request.method.clone(),
                url: request.url.clone(),
                status,
            });
        }

        tracing::debug!(
            url = %request.url,
            status,
            bytes = body.len(),
            "fetch complete"
        );

        Ok(ResponsePayload {
            bytes: body,
            headers: parse_header_lines(&header_lines),
        })
    }
}
