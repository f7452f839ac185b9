//! Result and document record types.
//!
//! [`ExtractResult`] is the extraction-facing record; [`Document`] is the
//! shape handed to downstream ingestion pipelines (page content plus a small
//! metadata block). Both are constructed once per load call and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// Result of extracting a single fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractResult {
    /// Original identifier (URL) used to fetch the page.
    pub source: String,

    /// Best-effort page title; empty when no candidate matched.
    pub title: String,

    /// Raw `article:published_time` attribute value, if present.
    pub date: Option<String>,

    /// Whitespace-normalized main content; may be empty.
    pub content: String,

    /// Number of word-like tokens in `content`.
    ///
    /// Always consistent with `content` under the crate's tokenization
    /// rule: zero iff `content` has no word-like runs.
    pub word_count: usize,
}

impl ExtractResult {
    /// Convert into the downstream [`Document`] record.
    ///
    /// `word_count` becomes the metadata `content_length` field.
    #[must_use]
    pub fn into_document(self) -> Document {
        Document {
            page_content: self.content,
            metadata: DocumentMetadata {
                source: self.source,
                title: self.title,
                date: self.date,
                content_length: self.word_count,
            },
        }
    }
}

/// A document record for downstream ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Normalized page content.
    pub page_content: String,

    /// Metadata describing the page.
    pub metadata: DocumentMetadata,
}

/// Metadata attached to a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Original identifier (URL) used to fetch the page.
    pub source: String,

    /// Best-effort page title; empty when no candidate matched.
    pub title: String,

    /// Raw publication timestamp; omitted from serialized output when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Word count of `page_content`.
    pub content_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(date: Option<&str>) -> ExtractResult {
        ExtractResult {
            source: "https://example.com/post".to_string(),
            title: "Real Title".to_string(),
            date: date.map(str::to_string),
            content: "Body text here".to_string(),
            word_count: 3,
        }
    }

    #[test]
    fn into_document_maps_word_count_to_content_length() {
        let doc = sample_record(None).into_document();
        assert_eq!(doc.page_content, "Body text here");
        assert_eq!(doc.metadata.source, "https://example.com/post");
        assert_eq!(doc.metadata.title, "Real Title");
        assert_eq!(doc.metadata.content_length, 3);
        assert_eq!(doc.metadata.date, None);
    }

    #[test]
    fn serialized_document_omits_absent_date() {
        let doc = sample_record(None).into_document();
        let json = match serde_json::to_value(&doc) {
            Ok(json) => json,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert!(json["metadata"].get("date").is_none());
        assert_eq!(json["metadata"]["content_length"], 3);
        assert_eq!(json["page_content"], "Body text here");
    }

    #[test]
    fn serialized_document_keeps_present_date_verbatim() {
        let doc = sample_record(Some("2023-05-01T00:00:00Z")).into_document();
        let json = match serde_json::to_value(&doc) {
            Ok(json) => json,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(json["metadata"]["date"], "2023-05-01T00:00:00Z");
    }

    #[test]
    fn document_roundtrips_through_json() {
        let doc = sample_record(None).into_document();
        let json = match serde_json::to_string(&doc) {
            Ok(json) => json,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        let back: Document = match serde_json::from_str(&json) {
            Ok(back) => back,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(back, doc);
    }
}
