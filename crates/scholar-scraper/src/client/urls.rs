//! URL templates for the four Scholar pages the scraper understands.

use url::form_urlencoded;

/// Builds request URLs on top of a configurable site root.
#[derive(Debug, Clone)]
pub struct ScholarUrls {
    base_url: String,
}

impl ScholarUrls {
    /// Create templates rooted at `base_url` (no trailing slash needed).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Site root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Author search: `/citations?view_op=search_authors&mauthors={name}&hl=en`.
    #[must_use]
    pub fn author_search(&self, name: &str) -> String {
        format!(
            "{}/citations?view_op=search_authors&mauthors={}&hl=en",
            self.base_url,
            encode(name)
        )
    }

    /// Paper search: `/scholar?q={query}&hl=en`.
    #[must_use]
    pub fn paper_search(&self, query: &str) -> String {
        format!("{}/scholar?q={}&hl=en", self.base_url, encode(query))
    }

    /// Citation listing: `/scholar?cites={paperId}&hl=en`.
    #[must_use]
    pub fn citing_papers(&self, paper_id: &str) -> String {
        format!("{}/scholar?cites={}&hl=en", self.base_url, encode(paper_id))
    }

    /// Author profile: `/citations?user={authorId}&hl=en`.
    #[must_use]
    pub fn author_profile(&self, author_id: &str) -> String {
        format!("{}/citations?user={}&hl=en", self.base_url, encode(author_id))
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_match_site_layout() {
        let urls = ScholarUrls::new("https://scholar.google.com/");

        assert_eq!(
            urls.author_search("Yoshua Bengio"),
            "https://scholar.google.com/citations?view_op=search_authors&mauthors=Yoshua+Bengio&hl=en"
        );
        assert_eq!(
            urls.paper_search("transformer"),
            "https://scholar.google.com/scholar?q=transformer&hl=en"
        );
        assert_eq!(
            urls.citing_papers("5545332389437895000"),
            "https://scholar.google.com/scholar?cites=5545332389437895000&hl=en"
        );
        assert_eq!(
            urls.author_profile("JicYPdAAAAAJ"),
            "https://scholar.google.com/citations?user=JicYPdAAAAAJ&hl=en"
        );
    }

    #[test]
    fn test_query_is_encoded() {
        let urls = ScholarUrls::new("https://scholar.google.com");
        assert_eq!(
            urls.paper_search("C++ & Rust"),
            "https://scholar.google.com/scholar?q=C%2B%2B+%26+Rust&hl=en"
        );
    }
}
