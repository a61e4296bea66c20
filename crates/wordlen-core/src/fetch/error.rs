//! Page fetch error type and curl error classification.

use thiserror::Error;

/// Why a single page produced no text. Never propagated past the fetcher;
/// the page contributes empty text instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// URL parsed but its scheme is not fetched (only http/https).
    #[error("unsupported scheme {0:?}")]
    UnsupportedScheme(String),
    /// Connect or transfer timed out.
    #[error("timed out")]
    Timeout,
    /// DNS, connect, or socket-level failure.
    #[error("connection failed: {0}")]
    Connection(String),
    /// Server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response declared a content type that is not a text document.
    #[error("unsupported content type {0:?}")]
    UnsupportedContentType(String),
    /// Body exceeded the configured size cap.
    #[error("body exceeds {limit} bytes")]
    TooLarge { limit: u64 },
    /// Any other libcurl failure.
    #[error("transport: {0}")]
    Transport(String),
    /// The fetch never reported back (its worker died).
    #[error("fetch interrupted before completion")]
    Interrupted,
}

impl FetchError {
    /// Map a libcurl error onto the fetch taxonomy.
    pub fn from_curl(e: &curl::Error) -> Self {
        if e.is_operation_timedout() {
            return FetchError::Timeout;
        }
        if e.is_url_malformed() {
            return FetchError::InvalidUrl(e.to_string());
        }
        if e.is_unsupported_protocol() {
            return FetchError::UnsupportedScheme(e.to_string());
        }
        if e.is_couldnt_connect()
            || e.is_couldnt_resolve_host()
            || e.is_couldnt_resolve_proxy()
            || e.is_read_error()
            || e.is_recv_error()
            || e.is_send_error()
            || e.is_got_nothing()
            || e.is_ssl_connect_error()
        {
            return FetchError::Connection(e.to_string());
        }
        FetchError::Transport(e.to_string())
    }
}

/// True if a `Content-Type` header value names something worth parsing as a page.
/// Absent headers are accepted.
pub fn is_textual_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    mime.is_empty()
        || mime.starts_with("text/")
        || mime == "application/xml"
        || mime == "application/xhtml+xml"
        || mime.ends_with("+xml")
}
