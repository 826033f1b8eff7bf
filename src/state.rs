use std::time::Instant;
use crate::rate_limit::RateLimiter;

// app's shared state

pub struct AppState {
    pub rate_limiter: RateLimiter,
    pub started_at: Instant, // for /health uptime
}

impl AppState {
    pub fn new(rate_limiter: RateLimiter) -> Self {
        Self {
            rate_limiter,
            started_at: Instant::now(),
        }
    }
}
