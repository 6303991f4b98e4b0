//! Jittered pacing between causally chained requests.
//!
//! Scholar blocks clients that fire follow-up requests in lockstep, so every
//! dependent request (a citation lookup after a search) waits a random
//! duration drawn uniformly from a fixed interval. Top-level requests the
//! caller issues are never paced.

use std::time::Duration;

use rand::Rng;

/// Fixed-interval jitter, not an adaptive limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateGovernor {
    min: Duration,
    max: Duration,
}

impl RateGovernor {
    /// Pause between `min` and `max`; inverted bounds are swapped.
    #[must_use]
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max { Self { min, max } } else { Self { min: max, max: min } }
    }

    /// Governor that never waits.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { min: Duration::ZERO, max: Duration::ZERO }
    }

    /// `(min, max)` bounds.
    #[must_use]
    pub const fn bounds(&self) -> (Duration, Duration) {
        (self.min, self.max)
    }

    /// Draw the next pause.
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }

    /// Wait before a dependent request.
    pub async fn pace(&self) {
        // Drawn before awaiting: the thread-local RNG must not live across the await.
        let delay = self.next_delay();
        if delay.is_zero() {
            return;
        }
        tracing::debug!(
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "Pacing before dependent request"
        );
        tokio::time::sleep(delay).await;
    }
}

impl Default for RateGovernor {
    fn default() -> Self {
        Self::new(crate::config::api::RATE_INTERVAL_MIN, crate::config::api::RATE_INTERVAL_MAX)
    }
}
