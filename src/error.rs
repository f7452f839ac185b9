//! Error types for the load pipeline.
//!
//! Only the fetch and parser-resolution stages can fail. The extraction
//! heuristics are total: a missing title, content, or date degrades to an
//! empty or absent value, never an error.

/// Boxed transport error carried by fetch failures.
///
/// Fetchers other than the built-in HTTP client surface their own underlying
/// errors through this type.
pub type FetchSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for load operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or transport failure while retrieving the page.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// URL that was being fetched.
        url: String,
        /// Underlying transport error.
        #[source]
        source: FetchSource,
    },

    /// The source identifier does not parse as a URL.
    #[error("invalid source URL {url:?}: {source}")]
    InvalidUrl {
        /// The offending identifier.
        url: String,
        /// Parse failure reported by the `url` crate.
        #[source]
        source: url::ParseError,
    },

    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// No HTML parsing capability is configured.
    #[error(
        "no HTML parser is available; enable the `dom` feature or supply one \
         with `WebLoader::builder().parser(..)`"
    )]
    ParserUnavailable,
}

impl Error {
    /// Wrap a transport error as a fetch failure for `url`.
    pub fn fetch(url: impl Into<String>, source: impl Into<FetchSource>) -> Self {
        Error::Fetch {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Result type alias for load operations.
pub type Result<T> = std::result::Result<T, Error>;
