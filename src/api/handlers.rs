//! HTTP endpoint handlers

use axum::{
    body::{self, Bytes},
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode, Uri},
};
use tracing::{error, info};

/// Handler configuration shared by every request
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogger {
    /// Log each header as an extra `* Name: values` line
    pub log_headers: bool,
}

impl RequestLogger {
    /// Create a logger, optionally logging request headers
    pub fn new(log_headers: bool) -> Self {
        Self { log_headers }
    }
}

/// Handle any request - log it and reply 200 with an empty body
pub async fn log_request_handler(
    State(logger): State<RequestLogger>,
    request: Request,
) -> StatusCode {
    let (parts, body) = request.into_parts();

    // Body size is bounded by the transport only
    let body = match body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("failed to read request body: {}", e);
            Bytes::new()
        }
    };

    info!("{}", request_line(&parts.method, &parts.uri, &body));

    if logger.log_headers {
        for line in header_lines(&parts.headers) {
            info!("{}", line);
        }
    }

    StatusCode::OK
}

/// `METHOD URL`, followed by `: body` when the body is not empty
pub fn request_line(method: &Method, uri: &Uri, body: &[u8]) -> String {
    if body.is_empty() {
        format!("{} {}", method, uri)
    } else {
        format!("{} {}: {}", method, uri, String::from_utf8_lossy(body))
    }
}

/// One `* Name: v1, v2` line per distinct header, values in arrival order
pub fn header_lines(headers: &HeaderMap) -> Vec<String> {
    headers
        .keys()
        .map(|name| {
            let values: Vec<_> = headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()))
                .collect();
            format!("* {}: {}", canonical_header_name(name.as_str()), values.join(", "))
        })
        .collect()
}

/// Canonical MIME form of a header name: `x-trace-id` becomes `X-Trace-Id`.
///
/// The HTTP stack hands us lowercased names, so this restores the usual
/// spelling for display.
pub fn canonical_header_name(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}
