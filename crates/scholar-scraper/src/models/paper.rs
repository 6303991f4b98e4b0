//! Paper and publication records.

use serde::{Deserialize, Serialize};

use super::{UNKNOWN, ZERO_COUNT, parse_count};

/// A search hit or citing paper from a Scholar results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title (`"Unknown"` when the page has none).
    pub title: String,

    /// Link target of the title, usually the publisher page or PDF.
    pub url: Option<String>,

    /// Author list as printed in the byline, venue and year stripped.
    pub authors: String,

    /// First 4-digit run of the byline, or `"Unknown"`.
    pub year: String,

    /// Result snippet.
    pub snippet: String,

    /// Citation count as printed in the "Cited by" link, `"0"` without one.
    pub cited_by: String,

    /// Scholar cluster id from the "Cited by" link; the key for citation lookups.
    pub paper_id: Option<String>,

    /// Papers citing this one, attached only by an expanded search.
    ///
    /// `None` means either "not expanded", "no citations", or "the lookup failed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citing_papers: Option<Vec<Paper>>,
}

impl Paper {
    /// Snippet placeholder used when a result has no abstract text.
    pub const NO_SNIPPET: &'static str = "No abstract available";

    /// Citation count as a number.
    #[must_use]
    pub fn citations(&self) -> u64 {
        parse_count(&self.cited_by)
    }

    /// True when this paper qualifies for a citation lookup.
    #[must_use]
    pub fn has_citation_link(&self) -> bool {
        self.paper_id.is_some() && self.citations() > 0
    }
}

impl Default for Paper {
    fn default() -> Self {
        Self {
            title: UNKNOWN.to_string(),
            url: None,
            authors: UNKNOWN.to_string(),
            year: UNKNOWN.to_string(),
            snippet: Self::NO_SNIPPET.to_string(),
            cited_by: ZERO_COUNT.to_string(),
            paper_id: None,
            citing_papers: None,
        }
    }
}

/// A row of an author's profile publication table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Publication title.
    pub title: String,

    /// Author list.
    pub authors: String,

    /// Journal, conference or publisher line.
    pub venue: String,

    /// Publication year, or `"Unknown"`.
    pub year: String,

    /// Citation count, `"0"` when the cell is empty.
    pub cited_by: String,
}

impl Publication {
    /// Citation count as a number.
    #[must_use]
    pub fn citations(&self) -> u64 {
        parse_count(&self.cited_by)
    }
}

impl Default for Publication {
    fn default() -> Self {
        Self {
            title: UNKNOWN.to_string(),
            authors: UNKNOWN.to_string(),
            venue: UNKNOWN.to_string(),
            year: UNKNOWN.to_string(),
            cited_by: ZERO_COUNT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paper_is_never_empty() {
        let paper = Paper::default();
        assert_eq!(paper.title, "Unknown");
        assert_eq!(paper.cited_by, "0");
        assert!(paper.paper_id.is_none());
        assert!(!paper.has_citation_link());
    }

    #[test]
    fn test_citation_link_needs_id_and_count() {
        let mut paper = Paper { cited_by: "12".to_string(), ..Paper::default() };
        assert!(!paper.has_citation_link());

        paper.paper_id = Some("123".to_string());
        assert!(paper.has_citation_link());

        paper.cited_by = "0".to_string();
        assert!(!paper.has_citation_link());
    }

    #[test]
    fn test_citing_papers_omitted_from_json_when_absent() {
        let json = serde_json::to_value(Paper::default()).unwrap();
        assert!(json.get("citing_papers").is_none());
        assert!(json["url"].is_null());
        assert!(json["paper_id"].is_null());

        let expanded = Paper { citing_papers: Some(vec![]), ..Paper::default() };
        let json = serde_json::to_value(expanded).unwrap();
        assert_eq!(json["citing_papers"], serde_json::json!([]));
    }
}
