//! The document loader: fetch, then parse, then extract.
//!
//! A loader is anything implementing [`DocumentLoader`]; [`WebLoader`] is
//! the web implementation, wiring a [`PageFetcher`] and a [`PageParser`]
//! together through constructor injection. Each `load` call owns its own
//! page and record; there is no cross-call caching or pooling, so concurrent
//! loads of different sources are independent.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};
use crate::extract;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::page::{PageParser, ParsedPage};
use crate::result::Document;

/// Loads documents from a source identifier.
///
/// Implementations return a collection for interface compatibility with
/// multi-document loaders; [`WebLoader`] always yields exactly one record.
#[async_trait]
pub trait DocumentLoader {
    /// Load the documents behind `source`.
    async fn load(&self, source: &str) -> Result<Vec<Document>>;
}

/// Web page loader: fetches a URL, parses it, and extracts one [`Document`].
pub struct WebLoader {
    fetcher: Arc<dyn PageFetcher>,
    parser: Option<Arc<dyn PageParser>>,
}

impl WebLoader {
    /// Create a loader with the default HTTP fetcher and DOM parser.
    #[cfg(feature = "dom")]
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a loader with custom collaborators.
    #[must_use]
    pub fn builder() -> WebLoaderBuilder {
        WebLoaderBuilder::default()
    }

    /// Fetch and parse `source` without running extraction.
    ///
    /// # Errors
    ///
    /// Fails when no parser is configured, or when fetching or parsing
    /// fails.
    pub async fn scrape(&self, source: &str) -> Result<Box<dyn ParsedPage>> {
        let parser = self.parser()?;
        let html = self.fetcher.fetch(source).await?;
        parser.parse(&html)
    }

    /// The configured parser, or [`Error::ParserUnavailable`].
    ///
    /// Resolved before any I/O so a misconfigured loader never touches the
    /// network.
    fn parser(&self) -> Result<&Arc<dyn PageParser>> {
        self.parser.as_ref().ok_or(Error::ParserUnavailable)
    }
}

#[cfg(feature = "dom")]
impl Default for WebLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentLoader for WebLoader {
    async fn load(&self, source: &str) -> Result<Vec<Document>> {
        let parser = self.parser()?;

        let html = self.fetcher.fetch(source).await?;
        let page = parser.parse(&html)?;
        let record = extract::extract_page(page.as_ref(), source);

        debug!(source, word_count = record.word_count, "loaded document");
        Ok(vec![record.into_document()])
    }
}

/// Builder for [`WebLoader`].
#[derive(Default)]
pub struct WebLoaderBuilder {
    fetcher: Option<Arc<dyn PageFetcher>>,
    parser: Option<Arc<dyn PageParser>>,
}

impl WebLoaderBuilder {
    /// Use `fetcher` instead of the default [`HttpFetcher`].
    #[must_use]
    pub fn fetcher(mut self, fetcher: impl PageFetcher + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    /// Use `parser` instead of the default DOM parser.
    #[must_use]
    pub fn parser(mut self, parser: impl PageParser + 'static) -> Self {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Build the loader, filling unset collaborators with defaults.
    ///
    /// Without the `dom` feature there is no default parser; loading then
    /// fails with [`Error::ParserUnavailable`] until one is supplied.
    #[must_use]
    pub fn build(self) -> WebLoader {
        WebLoader {
            fetcher: self
                .fetcher
                .unwrap_or_else(|| Arc::new(HttpFetcher::new())),
            parser: self.parser.or_else(default_parser),
        }
    }
}

#[cfg(feature = "dom")]
fn default_parser() -> Option<Arc<dyn PageParser>> {
    Some(Arc::new(crate::page::DomParser::new()))
}

#[cfg(not(feature = "dom"))]
fn default_parser() -> Option<Arc<dyn PageParser>> {
    None
}
