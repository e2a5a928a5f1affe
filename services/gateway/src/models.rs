use serde::{Deserialize, Serialize};
use types::ids::ParticipantId;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitScoreRequest {
    pub participant_id: ParticipantId,
    /// Game slug (e.g., "quiz_blitz"); validated against the GameId format
    pub game_id: String,
    pub score: u64,
    pub elapsed_time: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitScoreResponse {
    pub accepted: bool,
    pub rank: u32,
}
