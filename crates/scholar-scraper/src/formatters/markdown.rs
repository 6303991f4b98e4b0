//! Markdown output formatting.

use std::borrow::Cow;

use crate::models::{Author, Paper, Publication};

/// Longest snippet printed before truncation.
const SNIPPET_CHARS: usize = 300;

/// Format a list of papers as Markdown, citing papers nested under each.
#[must_use]
pub fn format_papers_markdown(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, index: usize) -> String {
    let mut output = String::new();

    // Title, linked when the result has a URL
    match &paper.url {
        Some(url) => output.push_str(&format!("## {}. [{}]({})\n\n", index, paper.title, url)),
        None => output.push_str(&format!("## {}. {}\n\n", index, paper.title)),
    }

    output.push_str(&format!("**Authors**: {}\n\n", paper.authors));
    output.push_str(&format!("**Year**: {} | **Cited by**: {}\n\n", paper.year, paper.cited_by));

    if let Some(id) = &paper.paper_id {
        output.push_str(&format!("**Scholar ID**: `{id}`\n\n"));
    }

    output.push_str(&format!("**Snippet**: {}\n", truncate(&paper.snippet, SNIPPET_CHARS)));

    if let Some(citing) = &paper.citing_papers {
        output.push_str(&format!("\n### Citing papers ({})\n\n", citing.len()));
        for (j, citer) in citing.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} ({}) - {} - cited by {}\n",
                j + 1,
                citer.title,
                citer.year,
                citer.authors,
                citer.cited_by
            ));
        }
    }

    output
}

/// Format a list of authors as Markdown.
#[must_use]
pub fn format_authors_markdown(authors: &[Author]) -> String {
    if authors.is_empty() {
        return "No authors found.".to_string();
    }

    let mut output = format!("# Authors ({} results)\n\n", authors.len());

    for (i, author) in authors.iter().enumerate() {
        output.push_str(&format!("## {}. {}\n\n", i + 1, author.name));
        output.push_str(&format!("**Affiliation**: {}\n\n", author.affiliation));
        output.push_str(&format!("**Cited by**: {}\n\n", author.cited_by));

        if !author.interests.is_empty() {
            output.push_str(&format!("**Interests**: {}\n\n", author.interests.join(", ")));
        }

        if let Some(url) = &author.profile_url {
            let id = author.author_id.as_deref().unwrap_or("profile");
            output.push_str(&format!("**Profile**: [{id}]({url})\n"));
        }

        output.push_str("\n---\n\n");
    }

    output
}

/// Format an author's publication table as Markdown.
#[must_use]
pub fn format_publications_markdown(publications: &[Publication]) -> String {
    if publications.is_empty() {
        return "No publications found.".to_string();
    }

    let mut output = format!("# Publications ({} results)\n\n", publications.len());
    output.push_str("| # | Title | Authors | Venue | Year | Cited by |\n");
    output.push_str("|---|---|---|---|---|---|\n");

    for (i, publication) in publications.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            i + 1,
            escape_cell(&publication.title),
            escape_cell(&publication.authors),
            escape_cell(&publication.venue),
            publication.year,
            publication.cited_by
        ));
    }

    output
}

fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

fn escape_cell(text: &str) -> Cow<'_, str> {
    if text.contains('|') { Cow::Owned(text.replace('|', "\\|")) } else { Cow::Borrowed(text) }
}
