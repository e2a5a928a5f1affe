//! Score records and the submission merge rule
//!
//! One logical ScoreRecord exists per participant (upsert semantics).
//! The merge rule is "best score wins, ties broken by speed": a new
//! submission replaces the stored record only if it is a strict improvement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::ids::{GameId, ParticipantId};

/// A participant's best recorded result across all games
///
/// Invariant: at most one ScoreRecord per participant exists in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub participant_id: ParticipantId,
    /// Game that produced the current best result (informational; ranking
    /// is global across games)
    pub game_id: GameId,
    pub score: u64,
    /// Unit is fixed per game (seconds for quiz, milliseconds for reaction)
    pub elapsed_time: u64,
    pub updated_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Create a new record
    pub fn new(
        participant_id: ParticipantId,
        game_id: GameId,
        score: u64,
        elapsed_time: u64,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            participant_id,
            game_id,
            score,
            elapsed_time,
            updated_at,
        }
    }

    /// Merge rule: does this submission beat the existing record?
    ///
    /// Accept only a strictly higher score, or an equal score achieved
    /// strictly faster. Everything else is a rejection (a normal outcome,
    /// not an error).
    pub fn supersedes(&self, existing: &ScoreRecord) -> bool {
        self.score > existing.score
            || (self.score == existing.score && self.elapsed_time < existing.elapsed_time)
    }

    /// Ranking sort key: score descending, elapsed_time ascending,
    /// participant_id ascending as the deterministic final tie-break.
    pub fn rank_key(&self) -> (Reverse<u64>, u64, ParticipantId) {
        (Reverse(self.score), self.elapsed_time, self.participant_id)
    }
}
