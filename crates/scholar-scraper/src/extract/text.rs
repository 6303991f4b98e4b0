//! Free-text parsing helpers.
//!
//! Scholar mixes numbers into prose ("Cited by 42") and packs authors, venue
//! and year into one byline, so numeric and author fields are recovered by
//! pattern search instead of trusting the markup.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{UNKNOWN, ZERO_COUNT};

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit regex pattern"));

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year regex pattern"));

static BYLINE_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- .*?\d{4}.*").expect("valid byline regex pattern"));

static CITES_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cites=(\d+)").expect("valid cites regex pattern"));

/// Collapse whitespace runs (including `&nbsp;`) to single spaces and trim.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First contiguous run of digits, or `"0"`.
///
/// `"Cited by 1,234 others"` yields `"1"`: the comma ends the run.
#[must_use]
pub fn extract_digits(text: &str) -> String {
    DIGITS.find(text).map_or_else(|| ZERO_COUNT.to_string(), |m| m.as_str().to_string())
}

/// First 4-digit run, or `"Unknown"`.
#[must_use]
pub fn extract_year(text: &str) -> String {
    YEAR.find(text).map_or_else(|| UNKNOWN.to_string(), |m| m.as_str().to_string())
}

/// Author part of an `"authors - venue, year - host"` byline.
///
/// Drops everything from the first `"- "` that is followed (anywhere later)
/// by a 4-digit year. A byline without such a dash comes back whole.
///
/// Known limitation: an author name containing `"- "` ahead of a year-like
/// token is cut at that dash.
#[must_use]
pub fn split_authors(byline: &str) -> String {
    BYLINE_TAIL.replace(byline, "").trim().to_string()
}

/// Scholar cluster id from a "Cited by" href (`/scholar?cites=123...`).
#[must_use]
pub fn paper_id_from_href(href: &str) -> Option<String> {
    CITES_PARAM.captures(href).map(|caps| caps[1].to_string())
}

/// Value of query parameter `key` in an absolute URL.
#[must_use]
pub fn query_param(url: &url::Url, key: &str) -> Option<String> {
    url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}
