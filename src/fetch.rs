//! Page fetching.
//!
//! The fetch is the only suspending stage of the pipeline. [`HttpFetcher`]
//! downloads the raw body and decodes it to UTF-8 using the charset priority
//! of [`crate::encoding`]. Transport failures surface as
//! [`Error::Fetch`](crate::Error::Fetch) and are never retried; an HTTP
//! error status still yields its body, which the extraction heuristics treat
//! like any other page.

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};

/// Retrieves raw HTML text for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its decoded HTML text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher reusing an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Charset parameter of a `Content-Type` header value, if any.
fn content_type_charset(value: &str) -> Option<String> {
    value
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, charset)| charset.trim().trim_matches('"').to_string())
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        debug!(%url, "fetching page");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| Error::fetch(url, source))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "non-success status; extracting from the body anyway");
        }

        let charset = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(content_type_charset);

        let bytes = response
            .bytes()
            .await
            .map_err(|source| Error::fetch(url, source))?;

        Ok(encoding::decode_html(&bytes, charset.as_deref()))
    }
}
