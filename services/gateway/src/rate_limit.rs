use crate::error::AppError;
use dashmap::DashMap;
use std::time::Instant;

/// Token bucket state for one participant/endpoint pair
#[derive(Clone)]
struct Bucket {
    capacity: u32,
    tokens: f64,
    refill_rate: f64,
    last_update: Instant,
}

impl Bucket {
    fn new(capacity: u32, refill_rate: f64) -> Self {
        Self {
            capacity,
            tokens: capacity as f64,
            refill_rate,
            last_update: Instant::now(),
        }
    }

    fn allow_request(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();

        // Refill, capped at capacity
        self.tokens = f64::min(self.capacity as f64, self.tokens + elapsed * self.refill_rate);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Per-key token-bucket rate limiter.
///
/// Keys are "participant_id:endpoint" strings so one noisy game session
/// cannot starve the rest of the floor.
pub struct RateLimiter {
    buckets: DashMap<String, Bucket>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    pub fn check(&self, key: &str, capacity: u32, refill_rate: f64) -> Result<(), AppError> {
        let mut bucket = self
            .buckets
            .entry(key.to_string())
            .or_insert_with(|| Bucket::new(capacity, refill_rate));

        if bucket.allow_request() {
            Ok(())
        } else {
            Err(AppError::RateLimitExceeded(format!("Rate limit for {}", key)))
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_exhaustion() {
        let limiter = RateLimiter::new();
        assert!(limiter.check("p1:scores", 2, 0.0).is_ok());
        assert!(limiter.check("p1:scores", 2, 0.0).is_ok());
        assert!(limiter.check("p1:scores", 2, 0.0).is_err());

        // Separate key has its own bucket
        assert!(limiter.check("p2:scores", 2, 0.0).is_ok());
    }
}
