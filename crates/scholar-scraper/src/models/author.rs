//! Author record from the author search page.

use serde::{Deserialize, Serialize};

use super::{UNKNOWN, ZERO_COUNT, parse_count};

/// An author card from an author search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,

    /// Absolute profile URL.
    pub profile_url: Option<String>,

    /// Profile id (`user=` parameter of the profile link).
    pub author_id: Option<String>,

    /// Affiliation line.
    pub affiliation: String,

    /// Total citations, `"0"` when the card shows none.
    pub cited_by: String,

    /// Interest tags in card order.
    pub interests: Vec<String>,
}

impl Author {
    /// Citation count as a number.
    #[must_use]
    pub fn citations(&self) -> u64 {
        parse_count(&self.cited_by)
    }
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            profile_url: None,
            author_id: None,
            affiliation: UNKNOWN.to_string(),
            cited_by: ZERO_COUNT.to_string(),
            interests: Vec::new(),
        }
    }
}
