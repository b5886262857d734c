//! Sliding-window rate limiting for outbound calls.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tokio::time::{sleep, Instant};

use super::config::RateLimitConfig;

/// Admits at most `max_calls` calls in any `period`-long window, delaying
/// callers until a slot frees up.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    calls: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// A limiter for `config`.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            calls: Mutex::new(VecDeque::new()),
        }
    }

    /// The configured limit.
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Wait until a call is allowed, then record it.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut calls = self.calls.lock();
                let now = Instant::now();
                while calls
                    .front()
                    .is_some_and(|&at| now.duration_since(at) >= self.config.period)
                {
                    calls.pop_front();
                }
                if calls.len() < self.config.max_calls {
                    calls.push_back(now);
                    return;
                }
                match calls.front() {
                    Some(&oldest) => self.config.period.saturating_sub(now.duration_since(oldest)),
                    None => return,
                }
            };
            tracing::debug!(wait_ms = wait.as_millis() as u64, "Rate limit reached; waiting");
            sleep(wait).await;
        }
    }
}
