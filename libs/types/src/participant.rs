//! Participant profiles and roles
//!
//! Identity and role claims are issued by an external auth collaborator;
//! the engine trusts them as given.

use serde::{Deserialize, Serialize};

use crate::ids::ParticipantId;

/// Role claim attached to a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular player
    Player,
    /// Floor mentor (may run games, not reset scores)
    FloorMentor,
    /// Administrator (may bulk-reset the leaderboard)
    Admin,
}

impl Role {
    /// Whether this role may perform administrative operations
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Participant profile supplied by the auth collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

impl Profile {
    pub fn new(
        participant_id: ParticipantId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            participant_id,
            display_name: display_name.into(),
            email: email.into(),
            role,
        }
    }
}
