//! Caller-supplied options for paper searches.

use serde::{Deserialize, Serialize};

/// Options for [`crate::Scholar::search_papers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperSearchOptions {
    /// Maximum papers to return from the search page.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Fetch the citing papers of every result that has a citation id.
    #[serde(default)]
    pub expand_citations: bool,

    /// Maximum citing papers attached to each result.
    #[serde(default = "default_citations_per_paper")]
    pub citations_per_paper: usize,
}

const fn default_max_results() -> usize {
    10
}

const fn default_citations_per_paper() -> usize {
    5
}

impl PaperSearchOptions {
    /// Plain search without citation expansion.
    #[must_use]
    pub const fn new(max_results: usize) -> Self {
        Self {
            max_results,
            expand_citations: false,
            citations_per_paper: default_citations_per_paper(),
        }
    }

    /// Enable citation expansion with `per_paper` citing papers per result.
    #[must_use]
    pub const fn with_citations(mut self, per_paper: usize) -> Self {
        self.expand_citations = true;
        self.citations_per_paper = per_paper;
        self
    }
}

impl Default for PaperSearchOptions {
    fn default() -> Self {
        Self::new(default_max_results())
    }
}
