//! Data models for records scraped from Google Scholar.
//!
//! Every field is always present: text falls back to `"Unknown"`, counts to
//! `"0"`, links and ids to `None`, multi-valued fields to an empty list.

mod author;
mod enums;
mod inputs;
mod page;
mod paper;

pub use author::Author;
pub use enums::OutputFormat;
pub use inputs::PaperSearchOptions;
pub use page::ResultPage;
pub use paper::{Paper, Publication};

/// Sentinel for text fields the page did not provide.
pub const UNKNOWN: &str = "Unknown";

/// Sentinel for count fields the page did not provide.
pub const ZERO_COUNT: &str = "0";

/// Parse a scraped count, treating anything unparsable as zero.
#[must_use]
pub fn parse_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}
