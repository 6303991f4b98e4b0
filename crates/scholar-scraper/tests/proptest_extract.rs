//! Property-based tests for text parsing and extraction.

use proptest::prelude::*;
use scholar_scraper::extract::text::{extract_digits, extract_year, split_authors};
use scholar_scraper::extract::{Document, extract};
use scholar_scraper::models::Paper;

fn results_page(titles: &[String]) -> String {
    let results: String = titles
        .iter()
        .map(|t| format!(r#"<div class="gs_ri"><h3 class="gs_rt"><a href="/x">{t}</a></h3></div>"#))
        .collect();
    format!("<html><body>{results}</body></html>")
}

proptest! {
    /// Extraction returns exactly min(N, M) records in document order.
    #[test]
    fn extract_returns_min_of_nodes_and_max(
        titles in proptest::collection::vec("[A-Za-z]{1,12}", 0..15),
        max in 0usize..20,
    ) {
        let document = Document::parse(&results_page(&titles), "https://scholar.google.com").unwrap();
        let papers = extract::<Paper>(&document, max);

        prop_assert_eq!(papers.len(), titles.len().min(max));
        for (paper, title) in papers.iter().zip(&titles) {
            prop_assert_eq!(&paper.title, title);
        }
    }

    /// Digit extraction yields the first contiguous digit run.
    #[test]
    fn digits_first_run(prefix in "[A-Za-z ]{0,10}", n in 0u64..1_000_000, suffix in "[,A-Za-z ]{0,10}") {
        let text = format!("{prefix}{n}{suffix}");
        prop_assert_eq!(extract_digits(&text), n.to_string());
    }

    /// Text without digits counts as zero.
    #[test]
    fn digits_default_zero(text in "[A-Za-z ,.]{0,40}") {
        prop_assert_eq!(extract_digits(&text), "0");
    }

    /// Year extraction yields the first 4-digit token.
    #[test]
    fn year_first_token(year in 1000u32..2100, later in 1000u32..2100, venue in "[A-Za-z ]{0,20}") {
        let text = format!("{venue}, {year} - {later}");
        prop_assert_eq!(extract_year(&text), year.to_string());
    }

    /// Text without a 4-digit run has an unknown year.
    #[test]
    fn year_default_unknown(text in "[A-Za-z ,]{0,40}") {
        prop_assert_eq!(extract_year(&text), "Unknown");
    }

    /// Author splitting never panics and never grows the input.
    #[test]
    fn split_authors_never_grows(byline in ".{0,80}") {
        prop_assert!(split_authors(&byline).len() <= byline.len());
    }

    /// A well-formed byline splits to its author list.
    #[test]
    fn split_authors_well_formed(
        authors in "[A-Z] [A-Z][a-z]{1,8}(, [A-Z] [A-Z][a-z]{1,8}){0,3}",
        venue in "[A-Za-z ]{1,20}",
        year in 1900u32..2030,
    ) {
        let byline = format!("{authors} - {venue}, {year} - example.org");
        prop_assert_eq!(split_authors(&byline), authors);
    }
}
