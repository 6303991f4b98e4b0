//! Selector tables for the Scholar page templates.
//!
//! These mirror Scholar's current markup; when the site changes class names,
//! this file is the only place that needs to follow.

use super::{Container, Fallback, FieldRule, Record, SelectorSet, text};
use crate::models::{Author, Paper, Publication, UNKNOWN};

/// Author search cards (`.gs_ai_chpr`).
pub mod author {
    use super::{Fallback, FieldRule};

    /// Name link; its href is the profile.
    pub const NAME: FieldRule = FieldRule {
        name: "name",
        selectors: &[".gs_ai_name a"],
        contains: None,
        fallback: Fallback::Text(crate::models::UNKNOWN),
    };

    pub const AFFILIATION: FieldRule = FieldRule {
        name: "affiliation",
        selectors: &[".gs_ai_aff"],
        contains: None,
        fallback: Fallback::Text(crate::models::UNKNOWN),
    };

    pub const CITED_BY: FieldRule = FieldRule {
        name: "cited_by",
        selectors: &[".gs_ai_cby"],
        contains: None,
        fallback: Fallback::Count,
    };

    pub const INTERESTS: FieldRule = FieldRule {
        name: "interests",
        selectors: &[".gs_ai_one_int"],
        contains: None,
        fallback: Fallback::Empty,
    };
}

/// Search and citation result blocks (`.gs_ri`).
pub mod paper {
    use super::{Fallback, FieldRule, Paper};

    /// Linked title first, bare title (citations, books) second.
    pub const TITLE: FieldRule = FieldRule {
        name: "title",
        selectors: &[".gs_rt a", ".gs_rt"],
        contains: None,
        fallback: Fallback::Text(crate::models::UNKNOWN),
    };

    pub const URL: FieldRule = FieldRule {
        name: "url",
        selectors: &[".gs_rt a[href]"],
        contains: None,
        fallback: Fallback::Null,
    };

    /// "authors - venue, year - host" line.
    pub const BYLINE: FieldRule = FieldRule {
        name: "authors",
        selectors: &[".gs_a"],
        contains: None,
        fallback: Fallback::Text(crate::models::UNKNOWN),
    };

    pub const SNIPPET: FieldRule = FieldRule {
        name: "snippet",
        selectors: &[".gs_rs"],
        contains: None,
        fallback: Fallback::Text(Paper::NO_SNIPPET),
    };

    /// The footer link whose text reads "Cited by N".
    pub const CITED_BY: FieldRule = FieldRule {
        name: "cited_by",
        selectors: &["a"],
        contains: Some("Cited by"),
        fallback: Fallback::Count,
    };
}

/// Profile publication rows (`tr.gsc_a_tr`).
pub mod publication {
    use super::{Fallback, FieldRule};

    pub const TITLE: FieldRule = FieldRule {
        name: "title",
        selectors: &[".gsc_a_at"],
        contains: None,
        fallback: Fallback::Text(crate::models::UNKNOWN),
    };

    pub const AUTHORS: FieldRule = FieldRule {
        name: "authors",
        selectors: &[".gs_gray:nth-of-type(1)"],
        contains: None,
        fallback: Fallback::Text(crate::models::UNKNOWN),
    };

    pub const VENUE: FieldRule = FieldRule {
        name: "venue",
        selectors: &[".gs_gray:nth-of-type(2)"],
        contains: None,
        fallback: Fallback::Text(crate::models::UNKNOWN),
    };

    pub const YEAR: FieldRule = FieldRule {
        name: "year",
        selectors: &[".gsc_a_y"],
        contains: None,
        fallback: Fallback::Year,
    };

    pub const CITED_BY: FieldRule = FieldRule {
        name: "cited_by",
        selectors: &[".gsc_a_c"],
        contains: None,
        fallback: Fallback::Count,
    };
}

/// Author search page table.
pub const AUTHOR_SELECTORS: SelectorSet = SelectorSet {
    container: ".gs_ai_chpr",
    fields: &[author::NAME, author::AFFILIATION, author::CITED_BY, author::INTERESTS],
};

/// Paper search and citation listing table.
pub const PAPER_SELECTORS: SelectorSet = SelectorSet {
    container: ".gs_ri",
    fields: &[paper::TITLE, paper::URL, paper::BYLINE, paper::SNIPPET, paper::CITED_BY],
};

/// Author profile publication table.
pub const PUBLICATION_SELECTORS: SelectorSet = SelectorSet {
    container: "tr.gsc_a_tr",
    fields: &[
        publication::TITLE,
        publication::AUTHORS,
        publication::VENUE,
        publication::YEAR,
        publication::CITED_BY,
    ],
};

impl Record for Author {
    const KIND: &'static str = "author";
    const SELECTORS: &'static SelectorSet = &AUTHOR_SELECTORS;

    fn from_container(container: &Container<'_>) -> Self {
        let profile = container.href(&author::NAME);

        Self {
            name: container.text(&author::NAME),
            author_id: profile.as_ref().and_then(|url| text::query_param(url, "user")),
            profile_url: profile.map(String::from),
            affiliation: container.text(&author::AFFILIATION),
            cited_by: container.count(&author::CITED_BY),
            interests: container.list(&author::INTERESTS),
        }
    }
}

impl Record for Paper {
    const KIND: &'static str = "paper";
    const SELECTORS: &'static SelectorSet = &PAPER_SELECTORS;

    fn from_container(container: &Container<'_>) -> Self {
        let byline = container.optional_text(&paper::BYLINE);

        let authors = byline
            .as_deref()
            .map(text::split_authors)
            .filter(|authors| !authors.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());
        let year = byline.as_deref().map_or_else(|| UNKNOWN.to_string(), text::extract_year);

        Self {
            title: container.text(&paper::TITLE),
            url: container.href(&paper::URL).map(String::from),
            authors,
            year,
            snippet: container.text(&paper::SNIPPET),
            cited_by: container.count(&paper::CITED_BY),
            paper_id: container
                .raw_href(&paper::CITED_BY)
                .and_then(|href| text::paper_id_from_href(&href)),
            citing_papers: None,
        }
    }
}

impl Record for Publication {
    const KIND: &'static str = "publication";
    const SELECTORS: &'static SelectorSet = &PUBLICATION_SELECTORS;

    fn from_container(container: &Container<'_>) -> Self {
        Self {
            title: container.text(&publication::TITLE),
            authors: container.text(&publication::AUTHORS),
            venue: container.text(&publication::VENUE),
            year: container.year(&publication::YEAR),
            cited_by: container.count(&publication::CITED_BY),
        }
    }
}
