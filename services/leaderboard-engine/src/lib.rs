//! Leaderboard Engine
//!
//! Accepts score submissions from concurrently running game sessions,
//! maintains a globally consistent ranked view of top performers, and
//! pushes rank changes to all subscribed viewers.
//!
//! # Architecture
//!
//! ```text
//! Game sessions (external)
//!        │ submit
//!   ┌────▼────────┐
//!   │ Coordinator │  ← per-participant locks + global reset barrier
//!   └────┬────────┘
//!        │ commit
//!   ┌────▼────┐   ┌───────────┐
//!   │ScoreStore│──▶│ RankIndex │  ← full order, top-N view
//!   └─────────┘   └────┬──────┘
//!                      │ publish
//!              ┌───────▼──────┐
//!              │ BroadcastHub │  ← coalescing snapshot fan-out
//!              └──────────────┘
//! ```
//!
//! **Key invariants:**
//! - At most one ScoreRecord per participant (best-score-wins merge rule)
//! - Ranks are a dense 1..K sequence under a deterministic total order
//! - A submission is reflected in store, index, and broadcast, or nowhere
//! - Snapshot generations delivered to a subscriber strictly increase

pub mod config;
pub mod coordinator;
pub mod hub;
pub mod rank;
pub mod registry;
pub mod store;

pub use config::EngineConfig;
pub use coordinator::{SubmissionCoordinator, SubmitOutcome};

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
