//! Page text retrieval.
//!
//! A [`TextSource`] turns one URL into visible text or a typed [`FetchError`].
//! [`fetch_report`] and [`fetch_text`] sit on top and never fail: an error is
//! logged against its URL and the page contributes empty text.

mod charset;
mod error;
mod extract;
mod http;

pub use charset::decode_body;
pub use error::{is_textual_content_type, FetchError};
pub use extract::visible_text;
pub use http::{HttpOptions, HttpTextSource};

/// Anything that can produce the visible text of a page.
///
/// Shared by reference across fetch workers, so implementations must be `Sync`.
pub trait TextSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: TextSource + ?Sized> TextSource for std::sync::Arc<T> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Outcome of fetching one URL: its text (empty on failure) and the error, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub url: String,
    pub text: String,
    pub error: Option<FetchError>,
}

impl FetchReport {
    pub fn succeeded(url: &str, text: String) -> Self {
        Self {
            url: url.to_string(),
            text,
            error: None,
        }
    }

    pub fn failed(url: &str, error: FetchError) -> Self {
        Self {
            url: url.to_string(),
            text: String::new(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Fetch one URL, degrading any failure to empty text plus a diagnostic.
pub fn fetch_report<S: TextSource + ?Sized>(source: &S, url: &str) -> FetchReport {
    match source.fetch(url) {
        Ok(text) => {
            tracing::debug!(url, bytes = text.len(), "fetched page text");
            FetchReport::succeeded(url, text)
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "invalid url, contributing empty text");
            FetchReport::failed(url, e)
        }
    }
}

/// Fetch one URL and return its text, or `""` if anything went wrong.
pub fn fetch_text<S: TextSource + ?Sized>(source: &S, url: &str) -> String {
    fetch_report(source, url).text
}
