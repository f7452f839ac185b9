//! Heuristic extraction over a parsed page.
//!
//! Every heuristic here is total: absence of a match degrades to an empty
//! string or `None`, never an error. Extraction over arbitrary pages must
//! always produce a result.

use tracing::debug;

use crate::page::ParsedPage;
use crate::result::ExtractResult;
use crate::selectors::{
    first_non_empty_text, CONTENT_CANDIDATES, PUBLISHED_TIME_META, TITLE_CANDIDATES,
};
use crate::text::{count_words, normalize_whitespace};

/// Find the page title: first non-empty of `h1`, `h2`, `title`.
///
/// Returns the trimmed text of the winning element, or an empty string when
/// no candidate matches.
#[must_use]
pub fn find_title(page: &dyn ParsedPage) -> String {
    first_non_empty_text(page, TITLE_CANDIDATES).unwrap_or_default()
}

/// Find the main content: first non-empty of `main`, `article`, `div`,
/// `section`.
///
/// Returns the trimmed text of the winning element, or an empty string.
/// Interior whitespace is preserved; [`extract_page`] normalizes it.
#[must_use]
pub fn find_content(page: &dyn ParsedPage) -> String {
    first_non_empty_text(page, CONTENT_CANDIDATES).unwrap_or_default()
}

/// Raw publication timestamp from the `article:published_time` meta element.
///
/// The `content` attribute value is passed through unchanged, with no date
/// parsing, validation, or format normalization. `None` when the element or
/// attribute is absent.
#[must_use]
pub fn find_published_date(page: &dyn ParsedPage) -> Option<String> {
    page.first_attr(PUBLISHED_TIME_META, "content")
}

/// Run every heuristic against `page` and assemble the record for `source`.
#[must_use]
pub fn extract_page(page: &dyn ParsedPage, source: &str) -> ExtractResult {
    let title = find_title(page);
    let date = find_published_date(page);
    let content = normalize_whitespace(&find_content(page));
    let word_count = count_words(&content);

    debug!(
        source,
        title_len = title.len(),
        word_count,
        has_date = date.is_some(),
        "extracted page"
    );

    ExtractResult {
        source: source.to_string(),
        title,
        date,
        content,
        word_count,
    }
}
