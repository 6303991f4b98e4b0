//! Output formatters for scraped records.

pub mod json;
pub mod markdown;

pub use json::{authors_json, papers_json, publications_json};
pub use markdown::{format_authors_markdown, format_papers_markdown, format_publications_markdown};
