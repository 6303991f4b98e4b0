//! JSON output formatting.
//!
//! Records serialize with every field present; the wrappers add a result count.

use serde::Serialize;
use serde_json::{Value, json};

use crate::models::{Author, Paper, Publication};

fn wrap<T: Serialize>(kind: &str, records: &[T]) -> Value {
    json!({
        "kind": kind,
        "count": records.len(),
        "results": records,
    })
}

/// Papers (with any nested citing papers) as JSON.
#[must_use]
pub fn papers_json(papers: &[Paper]) -> Value {
    wrap("papers", papers)
}

/// Authors as JSON.
#[must_use]
pub fn authors_json(authors: &[Author]) -> Value {
    wrap("authors", authors)
}

/// Publications as JSON.
#[must_use]
pub fn publications_json(publications: &[Publication]) -> Value {
    wrap("publications", publications)
}
