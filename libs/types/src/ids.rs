//! Unique identifier types for leaderboard entities
//!
//! Participant IDs use UUID v7 for time-sortable ordering, enabling efficient
//! chronological queries. Game IDs are validated string slugs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a participant
///
/// Uses UUID v7 for time-based sorting. Also serves as the deterministic
/// final tie-break in the ranking comparator, so it must be totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Create a new ParticipantId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game identifier (slug)
///
/// Format: lowercase snake_case (e.g., "quiz_blitz", "reaction_dash")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Create a new GameId from a string
    ///
    /// # Panics
    /// Panics if the slug is invalid (non-empty, [a-z0-9_] only)
    pub fn new(slug: impl Into<String>) -> Self {
        Self::try_new(slug).expect("GameId must be a non-empty lowercase slug")
    }

    /// Try to create a GameId, returning None if invalid
    pub fn try_new(slug: impl Into<String>) -> Option<Self> {
        let s = slug.into();
        let valid = !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Some(Self(s))
        } else {
            None
        }
    }

    /// Get the slug string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
