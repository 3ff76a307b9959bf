use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::constants::MICROSECONDS_PER_SECOND;

/// Global request pacing shared by all workers.
pub struct RateLimiter {
    min_delay: Option<Duration>,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// `None` means unlimited.
    pub fn new(per_second: Option<u32>) -> Self {
        let min_delay = per_second
            .filter(|rate| *rate > 0)
            .map(|rate| Duration::from_micros(MICROSECONDS_PER_SECOND / u64::from(rate)));

        Self {
            min_delay,
            last_request: Mutex::new(None),
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.min_delay.is_none()
    }

    /// Wait until the next request is allowed to go out.
    pub async fn wait(&self) {
        let Some(min_delay) = self.min_delay else {
            return;
        };

        let mut last_req_guard = self.last_request.lock().await;
        if let Some(last) = *last_req_guard {
            let elapsed = last.elapsed();
            if elapsed < min_delay {
                tokio::time::sleep(min_delay - elapsed).await;
            }
        }
        *last_req_guard = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unlimited_does_not_wait() {
        let limiter = RateLimiter::new(None);
        assert!(limiter.is_unlimited());
        assert!(RateLimiter::new(Some(0)).is_unlimited());

        let start = Instant::now();
        for _ in 0..1000 {
            limiter.wait().await;
        }
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_rate_limit_paces_requests() {
        let limiter = RateLimiter::new(Some(20));
        let start = Instant::now();
        for _ in 0..5 {
            limiter.wait().await;
        }
        // first request is free, the next four are 50ms apart
        assert!(start.elapsed() >= Duration::from_millis(190));
    }
}
