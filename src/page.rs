//! Parsed-page capability traits and the default DOM implementation.
//!
//! The extractor consumes a [`ParsedPage`]: a parsed HTML document that can
//! answer first-match CSS selector queries for text and attribute values.
//! That is the only capability the pipeline requires, so any HTML parsing
//! library exposing selector queries can stand in. The default backend is
//! `dom_query`, gated behind the `dom` cargo feature.

use crate::error::Result;

/// A parsed HTML document supporting first-match selector queries.
///
/// Implementations are treated as immutable: the extractor borrows the page
/// for the duration of extraction and performs no mutation.
pub trait ParsedPage {
    /// Text content of the first element matching `selector`.
    ///
    /// Returns `None` when nothing matches. Text is returned untrimmed;
    /// trimming is the caller's concern.
    fn first_text(&self, selector: &str) -> Option<String>;

    /// Value of attribute `attr` on the first element matching `selector`.
    ///
    /// `None` when no element matches or the attribute is missing; the two
    /// cases are not distinguished.
    fn first_attr(&self, selector: &str, attr: &str) -> Option<String>;
}

/// Parses raw HTML text into a [`ParsedPage`].
pub trait PageParser: Send + Sync {
    /// Parse `html` into a queryable page.
    ///
    /// The default parser degrades gracefully on malformed markup and never
    /// returns an error; the `Result` exists for implementations that do
    /// validate their input.
    fn parse(&self, html: &str) -> Result<Box<dyn ParsedPage>>;
}

#[cfg(feature = "dom")]
mod dom {
    use dom_query::{Document, Selection};

    use super::{PageParser, ParsedPage};
    use crate::error::Result;

    /// Default [`ParsedPage`] backed by `dom_query`.
    pub struct DomPage {
        doc: Document,
    }

    impl DomPage {
        /// Parse an HTML document.
        #[must_use]
        pub fn parse(html: &str) -> Self {
            Self {
                doc: Document::from(html),
            }
        }
    }

    impl ParsedPage for DomPage {
        fn first_text(&self, selector: &str) -> Option<String> {
            self.doc
                .select(selector)
                .nodes()
                .first()
                .map(|node| Selection::from(*node).text().to_string())
        }

        fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
            self.doc
                .select(selector)
                .nodes()
                .first()
                .and_then(|node| Selection::from(*node).attr(attr))
                .map(|value| value.to_string())
        }
    }

    /// Default [`PageParser`] producing [`DomPage`]s.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DomParser;

    impl DomParser {
        /// Create the parser.
        #[must_use]
        pub fn new() -> Self {
            Self
        }
    }

    impl PageParser for DomParser {
        fn parse(&self, html: &str) -> Result<Box<dyn ParsedPage>> {
            Ok(Box::new(DomPage::parse(html)))
        }
    }

}

#[cfg(feature = "dom")]
pub use dom::{DomPage, DomParser};
