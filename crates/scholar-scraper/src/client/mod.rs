//! Google Scholar page fetcher.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff on 429/500/502/503/504
//! - Browser User-Agent and per-request timeout from [`Config`]

mod urls;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
    RetryTransientMiddleware, Retryable, RetryableStrategy, default_on_request_failure,
    policies::ExponentialBackoff,
};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

pub use urls::ScholarUrls;

/// Status codes worth another attempt.
pub const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Anything that can turn a URL into a response body.
///
/// The scraper only needs this one operation; retries and backoff are the
/// implementor's business, and an `Err` is treated as final.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the body text.
    async fn fetch(&self, url: &str) -> ClientResult<String>;
}

/// Retries exactly the statuses in [`RETRY_STATUSES`] plus transient transport failures.
struct ScholarRetryStrategy;

impl RetryableStrategy for ScholarRetryStrategy {
    fn handle(
        &self,
        res: &Result<reqwest::Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(response) if RETRY_STATUSES.contains(&response.status().as_u16()) => {
                Some(Retryable::Transient)
            }
            Ok(_) => None,
            Err(error) => default_on_request_failure(error),
        }
    }
}

/// HTTP fetcher for Google Scholar pages.
#[derive(Clone)]
pub struct ScholarClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Per-request deadline, reported back on timeouts.
    request_timeout: std::time::Duration,

    /// Retry budget the middleware was built with.
    max_retries: u32,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, config.user_agent.parse()?);
        headers.insert(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml".parse().expect("valid accept header"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(api::RETRY_MIN_BACKOFF, api::RETRY_MAX_BACKOFF)
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy_and_strategy(
                retry_policy,
                ScholarRetryStrategy,
            ))
            .build();

        Ok(Self { client, request_timeout: config.request_timeout, max_retries: config.max_retries })
    }

    /// Handle response status codes left over after retries.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    fn map_timeout(&self, error: ClientError) -> ClientError {
        let timed_out = match &error {
            ClientError::Http(e) => e.is_timeout(),
            ClientError::Middleware(reqwest_middleware::Error::Reqwest(e)) => e.is_timeout(),
            _ => false,
        };

        if timed_out { ClientError::Timeout(self.request_timeout) } else { error }
    }
}

#[async_trait::async_trait]
impl PageFetcher for ScholarClient {
    async fn fetch(&self, url: &str) -> ClientResult<String> {
        tracing::debug!(%url, "Fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_timeout(ClientError::from(e)))?;

        let response = self.handle_response(response).await?;
        response.text().await.map_err(|e| self.map_timeout(ClientError::from(e)))
    }
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient")
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
