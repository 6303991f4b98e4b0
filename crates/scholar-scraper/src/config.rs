//! Configuration for the Google Scholar scraper.

use std::time::Duration;

/// Site and transport constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for Google Scholar.
    pub const BASE_URL: &str = "https://scholar.google.com";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Retry budget for 429/5xx responses.
    pub const MAX_RETRIES: u32 = 3;

    /// Lower bound of the exponential backoff between retries.
    pub const RETRY_MIN_BACKOFF: Duration = Duration::from_secs(1);

    /// Upper bound of the exponential backoff between retries.
    pub const RETRY_MAX_BACKOFF: Duration = Duration::from_secs(30);

    /// Shortest pause before a dependent request.
    pub const RATE_INTERVAL_MIN: Duration = Duration::from_secs(2);

    /// Longest pause before a dependent request.
    pub const RATE_INTERVAL_MAX: Duration = Duration::from_secs(5);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Browser User-Agent; Scholar serves a stripped page to unknown clients.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
}

/// Environment variables read by [`Config::from_env`].
pub mod env {
    /// Per-request timeout in seconds.
    pub const REQUEST_TIMEOUT_SECS: &str = "SCHOLAR_REQUEST_TIMEOUT_SECS";

    /// Retry budget handed to the HTTP middleware.
    pub const MAX_RETRIES: &str = "SCHOLAR_MAX_RETRIES";
}

/// Scraper configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site root the URL templates are built on (overridden by mock servers in tests).
    pub base_url: String,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Per-request deadline.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retry budget for transient statuses, delegated to the fetcher.
    pub max_retries: u32,

    /// `(min, max)` bounds of the jittered pause between chained requests.
    pub rate_interval: (Duration, Duration),
}

impl Config {
    /// Create a configuration with the given timeout and retry budget.
    ///
    /// `None` keeps the default request timeout.
    #[must_use]
    pub fn new(request_timeout: Option<Duration>, max_retries: u32) -> Self {
        Self {
            request_timeout: request_timeout.unwrap_or(api::REQUEST_TIMEOUT),
            max_retries,
            ..Self::default()
        }
    }

    /// Create a test configuration pointed at a mock server.
    ///
    /// No retries and no pacing, so request counts are exact and tests stay fast.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0,
            rate_interval: (Duration::ZERO, Duration::ZERO),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but not a valid number.
    pub fn from_env() -> anyhow::Result<Self> {
        let request_timeout = match std::env::var(env::REQUEST_TIMEOUT_SECS) {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|e| {
                anyhow::anyhow!("invalid {}={raw:?}: {e}", env::REQUEST_TIMEOUT_SECS)
            })?)),
            Err(_) => None,
        };

        let max_retries = match std::env::var(env::MAX_RETRIES) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid {}={raw:?}: {e}", env::MAX_RETRIES))?,
            Err(_) => api::MAX_RETRIES,
        };

        Ok(Self::new(request_timeout, max_retries))
    }

    /// Set the pacing bounds.
    #[must_use]
    pub const fn with_rate_interval(mut self, min: Duration, max: Duration) -> Self {
        self.rate_interval = (min, max);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            rate_interval: (api::RATE_INTERVAL_MIN, api::RATE_INTERVAL_MAX),
        }
    }
}
