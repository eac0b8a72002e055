use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use log::debug;

/// Rate limiter keyed by viewer, guarding the inference endpoint.
///
/// Viewers whose quota has fully replenished are dropped at most once per
/// window, so the key map only holds recently active viewers.
pub struct ViewerRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    config: RateLimitConfig,
    sweep_interval: Duration,
    last_sweep: Mutex<Instant>,
}

impl ViewerRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            sweep_interval: Duration::from_secs(config.window_secs.max(1)),
            last_sweep: Mutex::new(Instant::now()),
            config,
        }
    }

    /// Check if this viewer may classify now, returns error if rate limited
    #[track_caller]
    pub fn check(&self, viewer_key: &str) -> AuthErrorResult<()> {
        let result = self
            .limiter
            .check_key(&viewer_key.to_string())
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            });

        self.sweep_stale_viewers();
        result
    }

    /// Number of viewers currently holding limiter state
    pub fn tracked_viewers(&self) -> usize {
        self.limiter.len()
    }

    fn sweep_stale_viewers(&self) {
        // Another caller holding the lock is already sweeping
        let Ok(mut last_sweep) = self.last_sweep.try_lock() else {
            return;
        };
        if last_sweep.elapsed() < self.sweep_interval {
            return;
        }

        let before = self.limiter.len();
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
        *last_sweep = Instant::now();

        debug!(
            "Rate limiter sweep: {} of {} viewers kept",
            self.limiter.len(),
            before
        );
    }
}

impl Default for ViewerRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
