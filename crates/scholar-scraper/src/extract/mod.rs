//! Field extraction from Scholar result pages.
//!
//! A [`Document`] is parsed once; [`extract`] then walks the container nodes
//! of one record type and builds a record from each through the type's
//! declarative [`FieldRule`] table. A rule that matches nothing yields its
//! [`Fallback`], so a missing sub-field never aborts a record or a page.
//!
//! `scraper::Html` is `!Send`: keep a `Document` out of scope across `.await`.

pub mod selectors;
pub mod text;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ExtractError;
use crate::models::{ResultPage, UNKNOWN, ZERO_COUNT};

pub use selectors::{AUTHOR_SELECTORS, PAPER_SELECTORS, PUBLICATION_SELECTORS};

/// Default used when a field rule matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Text field with a fixed placeholder (usually `"Unknown"`).
    Text(&'static str),
    /// Count field, defaults to `"0"`.
    Count,
    /// Year field, defaults to `"Unknown"`.
    Year,
    /// Link or id, defaults to `None`.
    Null,
    /// Multi-valued field, defaults to an empty list.
    Empty,
}

impl Fallback {
    /// Placeholder text for scalar fields.
    #[must_use]
    pub fn text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.to_string()),
            Self::Count => Some(ZERO_COUNT.to_string()),
            Self::Year => Some(UNKNOWN.to_string()),
            Self::Null | Self::Empty => None,
        }
    }
}

/// How to find one named sub-field inside a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Output field name.
    pub name: &'static str,
    /// Selectors tried in order; the first matching node wins.
    pub selectors: &'static [&'static str],
    /// Only nodes whose text contains this literal qualify.
    pub contains: Option<&'static str>,
    /// Value used when nothing qualifies.
    pub fallback: Fallback,
}

/// Container selector plus the field rules of one record type.
#[derive(Debug, Clone, Copy)]
pub struct SelectorSet {
    /// Matches exactly one node per record.
    pub container: &'static str,
    /// Every field the record reads.
    ///
    /// `Record::from_container` reads its rule constants directly; this list
    /// is the inventory used to validate a table (selectors parse, names are
    /// unique, every rule a record reads is listed).
    pub fields: &'static [FieldRule],
}

/// A record type that can be built from a container node.
pub trait Record: Sized {
    /// Record kind, for logs.
    const KIND: &'static str;

    /// Selector table for this record type.
    const SELECTORS: &'static SelectorSet;

    /// Build one record; never fails, missing fields take their fallback.
    fn from_container(container: &Container<'_>) -> Self;
}

/// A parsed page plus the URL relative links resolve against.
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Fails only when the body is empty or contains no markup at all.
    pub fn parse(body: &str, base_url: &str) -> Result<Self, ExtractError> {
        if body.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }
        if !body.contains('<') {
            return Err(ExtractError::NotMarkup { len: body.len() });
        }

        Ok(Self { html: Html::parse_document(body), base_url: Url::parse(base_url).ok() })
    }

    /// Container nodes matching `selector`, in document order.
    fn containers<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = Container<'a>> {
        let base_url = self.base_url.as_ref();
        self.html.select(selector).map(move |node| Container { node, base_url })
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

/// Extract up to `max_count` records of type `R`, in document order.
///
/// Pure: the same document always yields the same page.
#[must_use]
pub fn extract<R: Record>(document: &Document, max_count: usize) -> ResultPage<R> {
    let Some(container) = parse_selector(R::SELECTORS.container) else {
        return ResultPage::empty();
    };

    document
        .containers(&container)
        .take(max_count)
        .map(|node| R::from_container(&node))
        .collect()
}

/// Parse `body` and extract from it in one step.
///
/// # Errors
///
/// Returns the [`Document::parse`] error for unparsable bodies.
pub fn extract_from_body<R: Record>(
    body: &str,
    base_url: &str,
    max_count: usize,
) -> Result<ResultPage<R>, ExtractError> {
    let document = Document::parse(body, base_url)?;
    Ok(extract(&document, max_count))
}

fn parse_selector(raw: &str) -> Option<Selector> {
    match Selector::parse(raw) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::error!(selector = raw, error = %e, "Invalid selector in field table");
            None
        }
    }
}

/// One record's node, with typed per-field accessors.
#[derive(Clone, Copy)]
pub struct Container<'a> {
    node: ElementRef<'a>,
    base_url: Option<&'a Url>,
}

impl<'a> Container<'a> {
    /// First node matching `rule`, trying its selectors in order.
    fn find(&self, rule: &FieldRule) -> Option<ElementRef<'a>> {
        let found = rule.selectors.iter().filter_map(|raw| parse_selector(raw)).find_map(|sel| {
            self.node.select(&sel).find(|el| {
                rule.contains.is_none_or(|needle| element_text(*el).contains(needle))
            })
        });

        if found.is_none() {
            tracing::trace!(field = rule.name, "Field missing, using default");
        }
        found
    }

    /// Node text, or `None` when the node is absent or blank.
    #[must_use]
    pub fn optional_text(&self, rule: &FieldRule) -> Option<String> {
        self.find(rule).map(element_text).filter(|text| !text.is_empty())
    }

    /// Node text, or the rule's placeholder.
    #[must_use]
    pub fn text(&self, rule: &FieldRule) -> String {
        self.optional_text(rule).or_else(|| rule.fallback.text()).unwrap_or_default()
    }

    /// First digit run of the node text, or `"0"`.
    #[must_use]
    pub fn count(&self, rule: &FieldRule) -> String {
        self.find(rule)
            .map(|el| text::extract_digits(&element_text(el)))
            .unwrap_or_else(|| ZERO_COUNT.to_string())
    }

    /// First 4-digit run of the node text, or `"Unknown"`.
    #[must_use]
    pub fn year(&self, rule: &FieldRule) -> String {
        self.find(rule)
            .map(|el| text::extract_year(&element_text(el)))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Raw `href` of the matched node.
    #[must_use]
    pub fn raw_href(&self, rule: &FieldRule) -> Option<String> {
        self.find(rule).and_then(|el| el.value().attr("href")).map(str::to_string)
    }

    /// `href` of the matched node resolved against the page's base URL.
    #[must_use]
    pub fn href(&self, rule: &FieldRule) -> Option<Url> {
        let raw = self.raw_href(rule)?;
        match self.base_url {
            Some(base) => base.join(&raw).ok(),
            None => Url::parse(&raw).ok(),
        }
    }

    /// Text of every node matching the rule's first matching selector.
    #[must_use]
    pub fn list(&self, rule: &FieldRule) -> Vec<String> {
        rule.selectors
            .iter()
            .filter_map(|raw| parse_selector(raw))
            .map(|sel| {
                self.node
                    .select(&sel)
                    .map(element_text)
                    .filter(|text| {
                        !text.is_empty() && rule.contains.is_none_or(|needle| text.contains(needle))
                    })
                    .collect::<Vec<_>>()
            })
            .find(|values| !values.is_empty())
            .unwrap_or_default()
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    text::clean_text(&element.text().collect::<String>())
}
