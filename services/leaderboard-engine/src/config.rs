//! Engine configuration

use std::time::Duration;

/// Tuning knobs for the submission coordinator.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of entries exposed in the visible ranked view.
    pub top_n: usize,
    /// Bounded wait for the per-participant submission lock. A submission
    /// that cannot acquire its lock within this window fails with
    /// `SubmissionTimeout` instead of blocking indefinitely.
    pub submit_timeout: Duration,
    /// Attempts for a rank recompute when the store is transiently
    /// unavailable. The prior snapshot is retained between attempts.
    pub recompute_retries: u32,
    /// Delay between recompute attempts.
    pub recompute_backoff: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            submit_timeout: Duration::from_millis(500),
            recompute_retries: 3,
            recompute_backoff: Duration::from_millis(25),
        }
    }
}
