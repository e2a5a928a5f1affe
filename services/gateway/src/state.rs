use crate::rate_limit::RateLimiter;
use leaderboard_engine::SubmissionCoordinator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SubmissionCoordinator>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(engine: Arc<SubmissionCoordinator>) -> Self {
        Self {
            engine,
            rate_limiter: Arc::new(RateLimiter::new()),
        }
    }
}
