//! Types library for the arcade leaderboard engine
//!
//! This library provides all core type definitions shared by the leaderboard
//! services, ensuring type safety and deterministic ranking behavior.
//!
//! # Modules
//! - `ids`: Unique identifiers (ParticipantId, GameId)
//! - `score`: Score records and the best-score-wins merge rule
//! - `rank`: Rank projections and broadcast snapshots
//! - `participant`: Participant profiles and roles
//! - `errors`: Error taxonomy

// Public modules
pub mod errors;
pub mod ids;
pub mod participant;
pub mod rank;
pub mod score;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::participant::*;
    pub use crate::rank::*;
    pub use crate::score::*;
}
