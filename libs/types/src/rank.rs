//! Rank projections and broadcast snapshots
//!
//! RankEntry is a read-only projection; `rank` is derived from the ranking
//! comparator on every mutation and never stored independently.

use serde::{Deserialize, Serialize};

use crate::ids::ParticipantId;

/// A single row of the ranked view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub score: u64,
    pub elapsed_time: u64,
    /// Dense 1-based rank with no gaps
    pub rank: u32,
}

/// Full top-N snapshot pushed to every subscriber
///
/// `generation` is monotonically increasing; a subscriber never observes a
/// generation lower than one it has already seen, though it may skip
/// generations when the hub coalesces bursts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSnapshot {
    pub entries: Vec<RankEntry>,
    pub generation: u64,
}

impl RankSnapshot {
    /// Empty snapshot (initial state, or the result of a reset)
    pub fn empty(generation: u64) -> Self {
        Self {
            entries: Vec::new(),
            generation,
        }
    }
}
