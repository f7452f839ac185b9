//! Whitespace normalization and word counting.
//!
//! Both operations are pure and deterministic: same input, same output, no
//! locale-sensitive tokenization. Patterns are compiled once at first use
//! via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a maximal run of whitespace characters.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches a word-like token: a maximal run of alphanumeric/underscore
/// characters.
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("WORD_TOKEN regex"));

/// Collapse every whitespace run to a single space and trim the ends.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
#[must_use]
pub fn normalize_whitespace(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, " ").trim().to_string()
}

/// Count word-like tokens in `text`.
///
/// Zero when the text is empty or contains no such runs.
#[must_use]
pub fn count_words(text: &str) -> usize {
    WORD_TOKEN.find_iter(text).count()
}
