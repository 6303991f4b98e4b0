//! Entry points: fetch a page, extract records, optionally follow citations.
//!
//! Every call is an independent pipeline (fetch, parse, extract, then for an
//! expanded paper search one paced citation lookup per qualifying paper).
//! Nothing is shared between calls except the fetcher's connection pool.

use crate::client::{PageFetcher, ScholarClient, ScholarUrls};
use crate::config::Config;
use crate::error::ScholarResult;
use crate::extract::{self, Record};
use crate::governor::RateGovernor;
use crate::models::{Author, Paper, PaperSearchOptions, Publication, ResultPage};

/// Google Scholar scraper.
#[derive(Debug, Clone)]
pub struct Scholar<F = ScholarClient> {
    fetcher: F,
    governor: RateGovernor,
    urls: ScholarUrls,
}

impl Scholar<ScholarClient> {
    /// Create a scraper backed by the pooled HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = ScholarClient::new(config)?;
        Ok(Self::with_fetcher(client, config))
    }
}

impl<F: PageFetcher> Scholar<F> {
    /// Create a scraper over any fetcher.
    #[must_use]
    pub fn with_fetcher(fetcher: F, config: &Config) -> Self {
        let (min, max) = config.rate_interval;
        Self {
            fetcher,
            governor: RateGovernor::new(min, max),
            urls: ScholarUrls::new(&config.base_url),
        }
    }

    /// URL templates in use.
    #[must_use]
    pub const fn urls(&self) -> &ScholarUrls {
        &self.urls
    }

    /// Search author profiles by name.
    ///
    /// # Errors
    ///
    /// Returns error when the search page cannot be fetched or parsed.
    pub async fn search_authors(
        &self,
        name: &str,
        max_results: usize,
    ) -> ScholarResult<ResultPage<Author>> {
        self.fetch_page(&self.urls.author_search(name), max_results).await
    }

    /// Search papers, optionally attaching each result's citing papers.
    ///
    /// Citation lookups go one level deep and only for papers with a positive
    /// count and a citation id. A failed lookup leaves that paper's
    /// `citing_papers` as `None` and does not affect the others.
    ///
    /// # Errors
    ///
    /// Returns error when the search page itself cannot be fetched or parsed.
    pub async fn search_papers(
        &self,
        query: &str,
        options: &PaperSearchOptions,
    ) -> ScholarResult<ResultPage<Paper>> {
        let mut page = self.fetch_page(&self.urls.paper_search(query), options.max_results).await?;

        if options.expand_citations {
            self.expand_citations(&mut page, options.citations_per_paper).await;
        }

        Ok(page)
    }

    /// List papers citing `paper_id`.
    ///
    /// # Errors
    ///
    /// Returns error when the citation page cannot be fetched or parsed.
    pub async fn get_citing_papers(
        &self,
        paper_id: &str,
        max_results: usize,
    ) -> ScholarResult<ResultPage<Paper>> {
        self.fetch_page(&self.urls.citing_papers(paper_id), max_results).await
    }

    /// List publications on an author's profile.
    ///
    /// # Errors
    ///
    /// Returns error when the profile page cannot be fetched or parsed.
    pub async fn get_author_publications(
        &self,
        author_id: &str,
        max_results: usize,
    ) -> ScholarResult<ResultPage<Publication>> {
        self.fetch_page(&self.urls.author_profile(author_id), max_results).await
    }

    /// Attach citing papers in place, in result order, one paced lookup at a time.
    async fn expand_citations(&self, page: &mut ResultPage<Paper>, per_paper: usize) {
        for paper in page.iter_mut() {
            if !paper.has_citation_link() {
                continue;
            }
            let Some(paper_id) = paper.paper_id.clone() else {
                continue;
            };

            self.governor.pace().await;

            match self.get_citing_papers(&paper_id, per_paper).await {
                Ok(citing) => {
                    paper.citing_papers = Some(citing.into_records());
                }
                Err(e) => {
                    tracing::warn!(
                        paper_id = %paper_id,
                        error = %e,
                        "Citation lookup failed, leaving paper unexpanded"
                    );
                }
            }
        }
    }

    async fn fetch_page<R: Record>(
        &self,
        url: &str,
        max_results: usize,
    ) -> ScholarResult<ResultPage<R>> {
        let body = self.fetcher.fetch(url).await.inspect_err(|e| {
            tracing::debug!(%url, error = %e, "Fetch failed");
        })?;

        let page = extract::extract_from_body::<R>(&body, self.urls.base_url(), max_results)?;
        tracing::debug!(kind = R::KIND, count = page.len(), %url, "Extracted records");

        Ok(page)
    }
}
