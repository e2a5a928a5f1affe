//! Score store abstraction
//!
//! The engine is agnostic to the backing durable store; it only requires
//! per-key atomic upserts and a `clear_all` observable as a single instant.
//! `MemoryScoreStore` is the in-process implementation used by the gateway
//! and by tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use types::errors::EngineError;
use types::ids::ParticipantId;
use types::score::ScoreRecord;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Backing store transiently unreachable; the caller may retry.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => EngineError::StoreUnavailable { reason },
        }
    }
}

/// Durable mapping from participant to best score.
///
/// Contract:
/// - `upsert` is atomic per key (no partial write visible)
/// - `clear_all` is observable as a single instant to all subsequent
///   `get`/`list_all` calls
/// - `list_all` is unordered; ordering is the rank index's job
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn get(&self, participant_id: ParticipantId) -> Result<Option<ScoreRecord>, StoreError>;

    async fn upsert(&self, record: ScoreRecord) -> Result<(), StoreError>;

    async fn clear_all(&self) -> Result<(), StoreError>;

    async fn list_all(&self) -> Result<Vec<ScoreRecord>, StoreError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list_all().await?.len())
    }
}

/// In-memory score store.
///
/// A single RwLock over the map makes `clear_all` a single instant and
/// every `upsert` atomic per key.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    records: RwLock<HashMap<ParticipantId, ScoreRecord>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn get(&self, participant_id: ParticipantId) -> Result<Option<ScoreRecord>, StoreError> {
        let records = self.records.read().expect("score store lock poisoned");
        Ok(records.get(&participant_id).cloned())
    }

    async fn upsert(&self, record: ScoreRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().expect("score store lock poisoned");
        records.insert(record.participant_id, record);
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        let mut records = self.records.write().expect("score store lock poisoned");
        records.clear();
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        let records = self.records.read().expect("score store lock poisoned");
        Ok(records.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let records = self.records.read().expect("score store lock poisoned");
        Ok(records.len())
    }
}
