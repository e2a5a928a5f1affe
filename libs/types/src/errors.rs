//! Error types for the leaderboard engine
//!
//! Error taxonomy using thiserror. Merge-rule rejections are NOT errors;
//! they are reported through the `accepted` flag of the submit result.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Submission references an identity the system cannot resolve.
    /// Surfaced to the caller, not retried.
    #[error("Unknown participant: {participant_id}")]
    UnknownParticipant { participant_id: String },

    /// Per-participant lock contention exceeded the bounded wait.
    /// The caller may retry with backoff.
    #[error("Submission timed out after {waited_ms}ms waiting for participant lock")]
    SubmissionTimeout { waited_ms: u64 },

    /// Durable store transiently unreachable. The last-known-good rank
    /// snapshot is retained; nothing is partially applied.
    #[error("Score store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// Non-administrator attempted an administrative operation.
    /// Rejected before any state is touched.
    #[error("Unauthorized: administrator role required")]
    Unauthorized,
}
