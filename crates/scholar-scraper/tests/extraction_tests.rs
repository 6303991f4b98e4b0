//! Extraction tests against trimmed copies of real Scholar markup.

use scholar_scraper::extract::{Document, extract, extract_from_body};
use scholar_scraper::models::{Author, Paper, Publication};
use scholar_scraper::ExtractError;

const BASE: &str = "https://scholar.google.com";

// =============================================================================
// Fixtures
// =============================================================================

fn author_card(name: &str, user: &str, aff: Option<&str>, cites: Option<&str>, interests: &[&str]) -> String {
    let aff = aff.map(|a| format!(r#"<div class="gs_ai_aff">{a}</div>"#)).unwrap_or_default();
    let cites = cites.map(|c| format!(r#"<div class="gs_ai_cby">{c}</div>"#)).unwrap_or_default();
    let interests: String = interests
        .iter()
        .map(|i| format!(r#"<a class="gs_ai_one_int" href="/citations?view_op=search_authors&mauthors=label:x">{i}</a>"#))
        .collect();
    format!(
        r#"<div class="gs_ai gs_scl gs_ai_chpr">
             <div class="gs_ai_t">
               <h3 class="gs_ai_name"><a href="/citations?hl=en&amp;user={user}">{name}</a></h3>
               {aff}
               <div class="gs_ai_eml">Verified email at example.edu</div>
               {cites}
               <div class="gs_ai_int">{interests}</div>
             </div>
           </div>"#
    )
}

fn paper_result(
    title: Option<&str>,
    byline: Option<&str>,
    snippet: Option<&str>,
    cited: Option<(&str, &str)>,
) -> String {
    let title = title
        .map(|t| format!(r#"<h3 class="gs_rt"><a href="https://example.org/{}">{t}</a></h3>"#, t.len()))
        .unwrap_or_default();
    let byline = byline.map(|b| format!(r#"<div class="gs_a">{b}</div>"#)).unwrap_or_default();
    let snippet = snippet.map(|s| format!(r#"<div class="gs_rs">{s}</div>"#)).unwrap_or_default();
    let cited = cited
        .map(|(id, n)| format!(r#"<a href="/scholar?cites={id}&amp;as_sdt=2005&amp;sciodt=0,5&amp;hl=en">Cited by {n}</a>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="gs_r gs_or gs_scl"><div class="gs_ri">
             {title}{byline}{snippet}
             <div class="gs_fl"><a href="javascript:void(0)">Save</a>{cited}
               <a href="/scholar?q=related:abc:scholar.google.com/&amp;hl=en">Related articles</a></div>
           </div></div>"#
    )
}

fn publication_row(title: &str, authors: &str, venue: &str, year: &str, cites: &str) -> String {
    format!(
        r#"<tr class="gsc_a_tr">
             <td class="gsc_a_t"><a href="/citations?view_op=view_citation" class="gsc_a_at">{title}</a>
               <div class="gs_gray">{authors}</div>
               <div class="gs_gray">{venue}<span class="gs_oph">, {year}</span></div></td>
             <td class="gsc_a_c"><a href="/scholar?cites=1" class="gsc_a_ac gs_ibl">{cites}</a></td>
             <td class="gsc_a_y"><span class="gsc_a_h gsc_a_hc gs_ibl">{year}</span></td>
           </tr>"#
    )
}

fn page(body: &str) -> String {
    format!("<!doctype html><html><head><title>Google Scholar</title></head><body><div id=\"gs_res_ccl_mid\">{body}</div></body></html>")
}

fn papers_page(n: usize) -> String {
    page(
        &(0..n)
            .map(|i| {
                paper_result(
                    Some(&format!("Paper {i}")),
                    Some("A Author - Journal, 2001 - example.org"),
                    Some("snippet"),
                    Some(("100", "5")),
                )
            })
            .collect::<String>(),
    )
}

// =============================================================================
// Author search
// =============================================================================

#[test]
fn test_author_cards_are_extracted_in_order() {
    let html = page(&format!(
        "{}{}",
        author_card(
            "Yoshua Bengio",
            "kukA0LcAAAAJ",
            Some("Professor of computer science, University of Montreal"),
            Some("Cited by 1005337"),
            &["Machine learning", "deep learning", "artificial intelligence"],
        ),
        author_card("Samy Bengio", "Vs-MdPcAAAAJ", None, None, &[]),
    ));

    let authors = extract_from_body::<Author>(&html, BASE, 10).unwrap();

    assert_eq!(authors.len(), 2);
    let first = &authors[0];
    assert_eq!(first.name, "Yoshua Bengio");
    assert_eq!(
        first.profile_url.as_deref(),
        Some("https://scholar.google.com/citations?hl=en&user=kukA0LcAAAAJ")
    );
    assert_eq!(first.author_id.as_deref(), Some("kukA0LcAAAAJ"));
    assert_eq!(first.affiliation, "Professor of computer science, University of Montreal");
    assert_eq!(first.cited_by, "1005337");
    assert_eq!(first.interests, vec!["Machine learning", "deep learning", "artificial intelligence"]);

    let second = &authors[1];
    assert_eq!(second.name, "Samy Bengio");
    assert_eq!(second.affiliation, "Unknown");
    assert_eq!(second.cited_by, "0");
    assert!(second.interests.is_empty());
}

// =============================================================================
// Paper search
// =============================================================================

#[test]
fn test_paper_fields() {
    let html = page(&paper_result(
        Some("Attention is all you need"),
        Some("A Vaswani, N Shazeer, N Parmar&nbsp;- Advances in neural information processing systems, 2017&nbsp;- proceedings.neurips.cc"),
        Some("The dominant sequence transduction models are based on complex recurrent ..."),
        Some(("2960712678066186980", "150432")),
    ));

    let papers = extract_from_body::<Paper>(&html, BASE, 10).unwrap();
    assert_eq!(papers.len(), 1);

    let paper = &papers[0];
    assert_eq!(paper.title, "Attention is all you need");
    assert_eq!(paper.url.as_deref(), Some("https://example.org/25"));
    assert_eq!(paper.authors, "A Vaswani, N Shazeer, N Parmar");
    assert_eq!(paper.year, "2017");
    assert!(paper.snippet.starts_with("The dominant sequence"));
    assert_eq!(paper.cited_by, "150432");
    assert_eq!(paper.paper_id.as_deref(), Some("2960712678066186980"));
    assert!(paper.citing_papers.is_none());
}

#[test]
fn test_unlinked_title_falls_back_to_heading_text() {
    let html = page(
        r#"<div class="gs_ri"><h3 class="gs_rt"><span class="gs_ctu">[CITATION]</span> Pattern recognition</h3>
           <div class="gs_a">CM Bishop - 2006 - Springer</div></div>"#,
    );

    let papers = extract_from_body::<Paper>(&html, BASE, 10).unwrap();
    assert_eq!(papers[0].title, "[CITATION] Pattern recognition");
    assert!(papers[0].url.is_none());
    assert_eq!(papers[0].authors, "CM Bishop");
    assert_eq!(papers[0].year, "2006");
}

#[test]
fn test_missing_fields_only_affect_themselves() {
    let html = page(&format!(
        "{}{}{}",
        paper_result(None, Some("B Author - Venue, 2010"), Some("s"), Some(("7", "3"))),
        paper_result(Some("No byline"), None, Some("s"), Some(("8", "4"))),
        paper_result(Some("No citations"), Some("C Author - Venue, 2012"), None, None),
    ));

    let papers = extract_from_body::<Paper>(&html, BASE, 10).unwrap();
    assert_eq!(papers.len(), 3);

    // Missing title
    assert_eq!(papers[0].title, "Unknown");
    assert!(papers[0].url.is_none());
    assert_eq!(papers[0].authors, "B Author");
    assert_eq!(papers[0].cited_by, "3");
    assert_eq!(papers[0].paper_id.as_deref(), Some("7"));

    // Missing byline
    assert_eq!(papers[1].title, "No byline");
    assert_eq!(papers[1].authors, "Unknown");
    assert_eq!(papers[1].year, "Unknown");
    assert_eq!(papers[1].cited_by, "4");

    // Missing snippet and "Cited by"
    assert_eq!(papers[2].snippet, "No abstract available");
    assert_eq!(papers[2].cited_by, "0");
    assert!(papers[2].paper_id.is_none());
    assert_eq!(papers[2].year, "2012");
}

#[test]
fn test_cited_by_without_cites_param_has_no_id() {
    let html = page(
        r#"<div class="gs_ri"><h3 class="gs_rt">T</h3>
           <div class="gs_fl"><a href="/scholar?cluster=99">Cited by 12</a></div></div>"#,
    );

    let papers = extract_from_body::<Paper>(&html, BASE, 10).unwrap();
    assert_eq!(papers[0].cited_by, "12");
    assert!(papers[0].paper_id.is_none());
    assert!(!papers[0].has_citation_link());
}

#[test]
fn test_max_count_truncates_in_document_order() {
    let html = papers_page(5);
    let document = Document::parse(&html, BASE).unwrap();

    let papers = extract::<Paper>(&document, 3);
    let titles: Vec<_> = papers.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Paper 0", "Paper 1", "Paper 2"]);

    assert_eq!(extract::<Paper>(&document, 50).len(), 5);
    assert!(extract::<Paper>(&document, 0).is_empty());
}

#[test]
fn test_extract_is_idempotent() {
    let document = Document::parse(&papers_page(4), BASE).unwrap();
    assert_eq!(extract::<Paper>(&document, 10), extract::<Paper>(&document, 10));
}

#[test]
fn test_page_without_results_is_empty_not_error() {
    let html = page("<p>Your search did not match any articles.</p>");
    let papers = extract_from_body::<Paper>(&html, BASE, 10).unwrap();
    assert!(papers.is_empty());
}

#[test]
fn test_garbage_input_is_an_error() {
    assert_eq!(extract_from_body::<Paper>("", BASE, 10).unwrap_err(), ExtractError::EmptyDocument);
    assert!(matches!(
        extract_from_body::<Author>("{\"error\": true}", BASE, 10),
        Err(ExtractError::NotMarkup { .. })
    ));
}

// =============================================================================
// Author profile publications
// =============================================================================

#[test]
fn test_publication_rows() {
    let html = format!(
        r#"<html><body><table id="gsc_a_t"><tbody id="gsc_a_b">{}{}</tbody></table></body></html>"#,
        publication_row(
            "Deep learning",
            "Y LeCun, Y Bengio, G Hinton",
            "nature 521 (7553), 436-444",
            "2015",
            "85123"
        ),
        publication_row("Untitled draft", "J Doe", "arXiv preprint", "", ""),
    );

    let publications = extract_from_body::<Publication>(&html, BASE, 10).unwrap();
    assert_eq!(publications.len(), 2);

    let first = &publications[0];
    assert_eq!(first.title, "Deep learning");
    assert_eq!(first.authors, "Y LeCun, Y Bengio, G Hinton");
    assert_eq!(first.venue, "nature 521 (7553), 436-444, 2015");
    assert_eq!(first.year, "2015");
    assert_eq!(first.cited_by, "85123");

    let second = &publications[1];
    assert_eq!(second.year, "Unknown");
    assert_eq!(second.cited_by, "0");
}
