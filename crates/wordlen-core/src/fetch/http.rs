//! HTTP(S) page source backed by libcurl.
//!
//! One blocking GET per page: follows redirects, enforces connect and total
//! timeouts, rejects non-2xx and non-text responses, then hands the body to
//! the visible-text extractor.

use std::time::Duration;

use crate::config::WordlenConfig;

use super::charset::decode_body;
use super::error::{is_textual_content_type, FetchError};
use super::extract::visible_text;
use super::TextSource;

/// Transfer settings for [`HttpTextSource`].
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: String,
    pub max_body_bytes: Option<u64>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        HttpOptions::from(&WordlenConfig::default())
    }
}

impl From<&WordlenConfig> for HttpOptions {
    fn from(cfg: &WordlenConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone(),
            max_body_bytes: cfg.max_body_bytes,
        }
    }
}

/// Fetches pages over HTTP(S) and returns their visible body text.
///
/// Runs in the calling thread; the fetch pool gives each worker its own transfer.
#[derive(Debug, Clone, Default)]
pub struct HttpTextSource {
    options: HttpOptions,
}

impl HttpTextSource {
    pub fn new(options: HttpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HttpOptions {
        &self.options
    }

    /// GET the page and return the body decoded to text (declared charset, else UTF-8).
    pub fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        check_scheme(url)?;

        let mut body: Vec<u8> = Vec::new();
        let mut overflowed = false;
        let limit = self.options.max_body_bytes;

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|e| FetchError::from_curl(&e))?;
        self.configure(&mut easy)
            .map_err(|e| FetchError::from_curl(&e))?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    if let Some(max) = limit {
                        if body.len() as u64 + data.len() as u64 > max {
                            overflowed = true;
                            return Ok(0); // abort transfer
                        }
                    }
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| FetchError::from_curl(&e))?;
            transfer.perform()
        };

        if let Err(e) = performed {
            if overflowed {
                return Err(FetchError::TooLarge {
                    limit: limit.unwrap_or_default(),
                });
            }
            return Err(FetchError::from_curl(&e));
        }

        let code = easy.response_code().map_err(|e| FetchError::from_curl(&e))?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        let content_type = easy.content_type().ok().flatten();
        if let Some(content_type) = content_type {
            if !is_textual_content_type(content_type) {
                return Err(FetchError::UnsupportedContentType(content_type.to_string()));
            }
        }

        Ok(decode_body(&body, content_type))
    }

    fn configure(&self, easy: &mut curl::easy::Easy) -> Result<(), curl::Error> {
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirections)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        easy.useragent(&self.options.user_agent)?;
        easy.accept_encoding("")?; // any encoding libcurl can decode
        Ok(())
    }
}

impl TextSource for HttpTextSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let body = self.fetch_body(url)?;
        Ok(visible_text(&body))
    }
}

/// Only http and https are fetched; everything else fails before touching the network.
fn check_scheme(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let cfg = WordlenConfig {
            connect_timeout_secs: 2,
            timeout_secs: 7,
            max_redirections: 1,
            user_agent: "probe/1".into(),
            max_body_bytes: Some(64),
            ..WordlenConfig::default()
        };
        let opts = HttpOptions::from(&cfg);
        assert_eq!(opts.connect_timeout, Duration::from_secs(2));
        assert_eq!(opts.timeout, Duration::from_secs(7));
        assert_eq!(opts.max_redirections, 1);
        assert_eq!(opts.user_agent, "probe/1");
        assert_eq!(opts.max_body_bytes, Some(64));
    }

    #[test]
    fn garbage_url_is_invalid() {
        let source = HttpTextSource::default();
        assert!(matches!(
            source.fetch("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn non_http_scheme_rejected() {
        let source = HttpTextSource::default();
        assert_eq!(
            source.fetch("ftp://example.com/file.txt"),
            Err(FetchError::UnsupportedScheme("ftp".into()))
        );
        assert_eq!(
            source.fetch("file:///etc/hostname"),
            Err(FetchError::UnsupportedScheme("file".into()))
        );
    }
}
