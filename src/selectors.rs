//! Fixed selector policy for title and content candidates.
//!
//! The candidate lists are ordered from most semantically specific to most
//! generic and are scanned with short-circuit first-match semantics. The
//! orders are fixed policy, not configuration.

use crate::page::ParsedPage;

/// Title candidates in priority order.
///
/// Headings are preferred over the document title element: on real-world
/// pages `<title>` often carries site chrome ("Article | Site"), while a
/// leading heading names the article itself.
pub const TITLE_CANDIDATES: &[&str] = &["h1", "h2", "title"];

/// Content candidates in priority order.
///
/// Semantic landmark elements come first; the generic structural containers
/// are far more likely to include navigation or boilerplate text.
pub const CONTENT_CANDIDATES: &[&str] = &["main", "article", "div", "section"];

/// Meta element carrying the raw publication timestamp.
pub const PUBLISHED_TIME_META: &str = "meta[property='article:published_time']";

/// Scan `candidates` in order, returning the first trimmed non-empty text.
///
/// Pure function over (page, ordered selector list). Each candidate is
/// queried for its first matching element; the scan stops at the first
/// selector whose text survives trimming, and later candidates are never
/// evaluated. A selector with no match is treated the same as one whose
/// text trims to nothing.
#[must_use]
pub fn first_non_empty_text(page: &dyn ParsedPage, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        if let Some(text) = page.first_text(candidate) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Page stub answering from a fixed selector → text table, recording
    /// which selectors were queried.
    struct StubPage {
        entries: Vec<(&'static str, &'static str)>,
        queried: std::cell::RefCell<Vec<String>>,
    }

    impl StubPage {
        fn new(entries: &[(&'static str, &'static str)]) -> Self {
            Self {
                entries: entries.to_vec(),
                queried: std::cell::RefCell::new(Vec::new()),
            }
        }
    }

    impl ParsedPage for StubPage {
        fn first_text(&self, selector: &str) -> Option<String> {
            self.queried.borrow_mut().push(selector.to_string());
            self.entries
                .iter()
                .find(|(sel, _)| *sel == selector)
                .map(|(_, text)| (*text).to_string())
        }

        fn first_attr(&self, _selector: &str, _attr: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn returns_first_candidate_with_non_empty_text() {
        let page = StubPage::new(&[("h1", "Heading"), ("title", "Title")]);
        let found = first_non_empty_text(&page, TITLE_CANDIDATES);
        assert_eq!(found, Some("Heading".to_string()));
    }

    #[test]
    fn short_circuits_after_first_hit() {
        let page = StubPage::new(&[("h1", "Heading"), ("h2", "Sub"), ("title", "Title")]);
        let _ = first_non_empty_text(&page, TITLE_CANDIDATES);
        assert_eq!(*page.queried.borrow(), vec!["h1".to_string()]);
    }

    #[test]
    fn skips_whitespace_only_text() {
        let page = StubPage::new(&[("h1", "   \n\t"), ("h2", "Fallback")]);
        let found = first_non_empty_text(&page, TITLE_CANDIDATES);
        assert_eq!(found, Some("Fallback".to_string()));
    }

    #[test]
    fn trims_the_winning_text() {
        let page = StubPage::new(&[("main", "  padded body  ")]);
        let found = first_non_empty_text(&page, CONTENT_CANDIDATES);
        assert_eq!(found, Some("padded body".to_string()));
    }

    #[test]
    fn returns_none_when_no_candidate_matches() {
        let page = StubPage::new(&[]);
        assert_eq!(first_non_empty_text(&page, TITLE_CANDIDATES), None);
        // Every candidate was still tried.
        assert_eq!(page.queried.borrow().len(), TITLE_CANDIDATES.len());
    }
}
