//! # web-distill
//!
//! Fetches a web page and distills a best-effort title, publication date,
//! and main textual content into a normalized document record for
//! downstream ingestion (indexing or retrieval pipelines).
//!
//! The extraction core applies ordered fallback heuristics over a parsed
//! HTML tree: headings before the document title element, semantic landmark
//! elements before generic containers, short-circuiting on the first
//! non-empty match. Whitespace is then collapsed and a word count computed
//! over the result. Heuristics are total: pages with no usable title or
//! content yield empty fields, never errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use web_distill::extract;
//!
//! let html = r#"<html><head><title>T</title></head>
//! <body><h1>Real Title</h1><article>Body text here</article></body></html>"#;
//!
//! let result = extract(html, "https://example.com/post")?;
//! assert_eq!(result.title, "Real Title");
//! assert_eq!(result.word_count, 3);
//! # Ok::<(), web_distill::Error>(())
//! ```
//!
//! Loading over HTTP goes through [`WebLoader`], which implements the
//! [`DocumentLoader`] capability trait:
//!
//! ```rust,no_run
//! use web_distill::{DocumentLoader, WebLoader};
//!
//! # async fn run() -> web_distill::Result<()> {
//! let loader = WebLoader::new();
//! let docs = loader.load("https://example.com/post").await?;
//! for doc in &docs {
//!     println!("{} ({} words)", doc.metadata.title, doc.metadata.content_length);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod extract;
mod result;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page fetching.
pub mod fetch;

/// The document loader pipeline.
pub mod loader;

/// Parsed-page capability traits and the default DOM implementation.
pub mod page;

/// Fixed selector policy for title and content candidates.
pub mod selectors;

/// Whitespace normalization and word counting.
pub mod text;

// Public API - re-exports
pub use error::{Error, FetchSource, Result};
pub use extract::{extract_page, find_content, find_published_date, find_title};
pub use fetch::{HttpFetcher, PageFetcher};
pub use loader::{DocumentLoader, WebLoader, WebLoaderBuilder};
pub use page::{PageParser, ParsedPage};
pub use result::{Document, DocumentMetadata, ExtractResult};

#[cfg(feature = "dom")]
pub use page::{DomPage, DomParser};

/// Extract a record from an HTML string using the default DOM parser.
///
/// `source` is recorded unchanged on the result. Extraction never fails on
/// content grounds; heuristics degrade to empty values instead.
#[cfg(feature = "dom")]
#[allow(clippy::unnecessary_wraps)]
pub fn extract(html: &str, source: &str) -> Result<ExtractResult> {
    let page = page::DomPage::parse(html);
    Ok(extract::extract_page(&page, source))
}

/// Extract a record from raw HTML bytes.
///
/// The bytes are decoded to UTF-8 first, honoring `<meta>` charset
/// declarations and defaulting to UTF-8; invalid sequences are replaced
/// rather than rejected.
#[cfg(feature = "dom")]
pub fn extract_bytes(html: &[u8], source: &str) -> Result<ExtractResult> {
    let text = encoding::decode_html(html, None);
    extract(&text, source)
}
