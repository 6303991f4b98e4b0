//! Google Scholar Scraper
//!
//! Fetches Google Scholar result pages and turns them into typed records:
//! paper search hits, author cards, profile publications and citing papers.
//!
//! # Features
//!
//! - **Tolerant extraction**: declarative selector tables with typed defaults,
//!   a missing field never drops a record
//! - **Citation expansion**: one level of "cited by" lookups per search result
//! - **Polite**: jittered pacing between chained requests, retry with backoff on 429/5xx
//!
//! # Example
//!
//! ```no_run
//! use scholar_scraper::{Config, PaperSearchOptions, Scholar};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let scholar = Scholar::new(&config)?;
//!
//!     let options = PaperSearchOptions::new(3).with_citations(3);
//!     let papers = scholar.search_papers("transformer deep learning", &options).await?;
//!     for paper in &papers {
//!         println!("{} ({})", paper.title, paper.year);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatters;
pub mod governor;
pub mod models;
pub mod scholar;

pub use client::{PageFetcher, ScholarClient};
pub use config::Config;
pub use error::{ClientError, ExtractError, ScholarError};
pub use governor::RateGovernor;
pub use models::{Author, PaperSearchOptions, Paper, Publication, ResultPage};
pub use scholar::Scholar;
