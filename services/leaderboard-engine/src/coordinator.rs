//! Submission coordinator
//!
//! Sole shared-mutation boundary of the engine. Serializes concurrent
//! submissions per participant, applies the best-score-wins merge rule,
//! commits accepted changes to the store, and drives the rank index and
//! broadcast hub.
//!
//! Locking layout:
//! - `barrier`: read-write gate. Every submit holds it in read mode for its
//!   whole commit; reset takes it in write mode, so a reset never races an
//!   in-flight submission and submissions for distinct participants never
//!   block each other.
//! - `participant_locks`: one mutex per participant. Two near-simultaneous
//!   submissions for the same participant would otherwise both read the old
//!   record and double-accept, or commit in the wrong order.
//! - `rank`: mutex over the rank index. Held across store listing, rebuild,
//!   and publish, so every snapshot generation matches the index state that
//!   produced it and a slower listing can never overwrite a newer one.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, info, warn};
use types::errors::EngineError;
use types::ids::{GameId, ParticipantId};
use types::participant::Role;
use types::rank::RankSnapshot;
use types::score::ScoreRecord;

use crate::config::EngineConfig;
use crate::hub::{BroadcastHub, Subscription};
use crate::rank::RankIndex;
use crate::registry::{ParticipantRegistry, RoleTallies};
use crate::store::ScoreStore;

/// Result of a submission. Rejection by the merge rule is a normal outcome
/// and is reported here, not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub accepted: bool,
    /// The submitting participant's current rank, whether or not the
    /// submission was accepted.
    pub rank: u32,
}

/// Engine-wide statistics for the admin surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct EngineStats {
    pub participants: RoleTallies,
    pub recorded_scores: usize,
}

/// Coordinates all mutation of the shared leaderboard state.
pub struct SubmissionCoordinator {
    store: Arc<dyn ScoreStore>,
    registry: Arc<ParticipantRegistry>,
    hub: BroadcastHub,
    rank: Mutex<RankIndex>,
    participant_locks: DashMap<ParticipantId, Arc<Mutex<()>>>,
    barrier: RwLock<()>,
    config: EngineConfig,
}

impl SubmissionCoordinator {
    pub fn new(
        store: Arc<dyn ScoreStore>,
        registry: Arc<ParticipantRegistry>,
        config: EngineConfig,
    ) -> Self {
        let rank = Mutex::new(RankIndex::new(config.top_n));
        Self {
            store,
            registry,
            hub: BroadcastHub::new(),
            rank,
            participant_locks: DashMap::new(),
            barrier: RwLock::new(()),
            config,
        }
    }

    /// Submit a completed game session's result.
    ///
    /// Accepted iff the participant has no record yet, or the new result
    /// beats the stored one (higher score, or equal score achieved faster).
    /// A duplicate or worse resubmission is a safe no-op with
    /// `accepted: false`.
    pub async fn submit(
        &self,
        participant_id: ParticipantId,
        game_id: GameId,
        score: u64,
        elapsed_time: u64,
    ) -> Result<SubmitOutcome, EngineError> {
        if !self.registry.contains(participant_id) {
            return Err(EngineError::UnknownParticipant {
                participant_id: participant_id.to_string(),
            });
        }

        // Shared side of the reset barrier: held for the whole commit.
        let _barrier = self.barrier.read().await;

        let lock = self.participant_lock(participant_id);
        let _serialized = acquire_with_timeout(&lock, self.config.submit_timeout).await?;

        let incoming = ScoreRecord::new(participant_id, game_id, score, elapsed_time, Utc::now());
        let existing = self.store.get(participant_id).await?;
        let accepted = match &existing {
            None => true,
            Some(record) => incoming.supersedes(record),
        };

        if !accepted {
            debug!(
                participant_id = %participant_id,
                score,
                elapsed_time,
                "Submission rejected by merge rule"
            );
            let rank = self.current_rank(participant_id).await?;
            return Ok(SubmitOutcome { accepted: false, rank });
        }

        let index = self.commit_and_publish(incoming).await?;
        // The participant was just upserted, so the rebuilt index ranks them.
        let rank = index
            .rank_of(participant_id)
            .expect("accepted submission missing from rebuilt index");

        info!(
            participant_id = %participant_id,
            score,
            elapsed_time,
            rank,
            "Score accepted"
        );
        Ok(SubmitOutcome { accepted: true, rank })
    }

    /// Administrative bulk reset. Mutually exclusive with every in-flight
    /// submit: waits for them to commit or reject, then clears store and
    /// index and broadcasts an empty snapshot.
    pub async fn reset(&self, actor_role: Role) -> Result<(), EngineError> {
        // Rejected before any state is touched.
        if !actor_role.is_admin() {
            return Err(EngineError::Unauthorized);
        }

        let _barrier = self.barrier.write().await;
        self.store.clear_all().await?;

        // No submit is in flight behind the write barrier, so dropping the
        // per-participant locks cannot strand a waiter. They are re-created
        // on demand by the next submission.
        self.participant_locks.clear();

        let mut index = self.rank.lock().await;
        index.clear();
        let generation = self.hub.publish(Vec::new());

        info!(generation, "Leaderboard reset; all scores cleared");
        Ok(())
    }

    /// Open a snapshot stream. The first receive resolves immediately with
    /// the snapshot current at join time.
    pub fn subscribe(&self) -> Subscription {
        self.hub.subscribe()
    }

    /// The snapshot current right now (initial page load path).
    pub async fn current_snapshot(&self) -> RankSnapshot {
        // Taking the rank lock orders this read after any in-progress
        // rebuild/publish pair.
        let _index = self.rank.lock().await;
        self.hub.current()
    }

    /// Any participant's current rank, inside or outside the top N.
    pub async fn rank_of(&self, participant_id: ParticipantId) -> Option<u32> {
        self.rank.lock().await.rank_of(participant_id)
    }

    /// Statistics for the admin surface.
    pub async fn stats(&self) -> Result<EngineStats, EngineError> {
        let recorded_scores = self.store.count().await?;
        Ok(EngineStats {
            participants: self.registry.tallies(),
            recorded_scores,
        })
    }

    pub fn registry(&self) -> &ParticipantRegistry {
        &self.registry
    }

    /// Number of live snapshot subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.hub.subscriber_count()
    }

    fn participant_lock(&self, participant_id: ParticipantId) -> Arc<Mutex<()>> {
        self.participant_locks
            .entry(participant_id)
            .or_default()
            .clone()
    }

    /// Current rank for a participant who already holds a record. Self-heals
    /// a stale index (a prior recompute that exhausted its retries) by
    /// rebuilding from the store.
    async fn current_rank(&self, participant_id: ParticipantId) -> Result<u32, EngineError> {
        if let Some(rank) = self.rank.lock().await.rank_of(participant_id) {
            return Ok(rank);
        }
        let index = self.refresh_and_publish().await?;
        index
            .rank_of(participant_id)
            .ok_or_else(|| EngineError::UnknownParticipant {
                participant_id: participant_id.to_string(),
            })
    }

    /// Commit an accepted record and fold it into the ranked view as one
    /// atomic step under the rank lock.
    ///
    /// The store listing happens before the upsert, and the incoming record
    /// is merged into that listing locally. Once the record is durably
    /// committed, nothing left in the step can fail: either store, index,
    /// and broadcast all reflect the submission, or none of them do.
    async fn commit_and_publish(
        &self,
        incoming: ScoreRecord,
    ) -> Result<MutexGuard<'_, RankIndex>, EngineError> {
        let mut index = self.rank.lock().await;
        let mut records = self.list_with_retry().await?;
        self.store.upsert(incoming.clone()).await?;

        match records
            .iter_mut()
            .find(|record| record.participant_id == incoming.participant_id)
        {
            Some(slot) => *slot = incoming,
            None => records.push(incoming),
        }

        index.rebuild(records, |pid| self.registry.display_name(pid));
        self.hub.publish(index.top());
        Ok(index)
    }

    /// Rebuild the rank index from the store and broadcast the new view as
    /// one atomic step. The rank lock is held across listing, rebuild, and
    /// publish, so a slower listing can never be published over a newer one.
    async fn refresh_and_publish(&self) -> Result<MutexGuard<'_, RankIndex>, EngineError> {
        let mut index = self.rank.lock().await;
        let records = self.list_with_retry().await?;
        index.rebuild(records, |pid| self.registry.display_name(pid));
        self.hub.publish(index.top());
        Ok(index)
    }

    /// Store listing with bounded retries. The prior snapshot is retained
    /// between attempts, never dropped.
    async fn list_with_retry(&self) -> Result<Vec<ScoreRecord>, EngineError> {
        let mut attempt = 0u32;
        loop {
            match self.store.list_all().await {
                Ok(records) => return Ok(records),
                Err(err) => {
                    attempt += 1;
                    if attempt >= self.config.recompute_retries {
                        warn!(
                            error = %err,
                            attempts = attempt,
                            "Rank recompute failed; prior snapshot retained"
                        );
                        return Err(err.into());
                    }
                    debug!(error = %err, attempt, "Retrying rank recompute");
                    tokio::time::sleep(self.config.recompute_backoff).await;
                }
            }
        }
    }
}

/// Bounded wait on the per-participant lock. Protects against a stuck
/// caller holding the lock forever due to an external fault.
async fn acquire_with_timeout(
    lock: &Mutex<()>,
    wait: Duration,
) -> Result<MutexGuard<'_, ()>, EngineError> {
    match tokio::time::timeout(wait, lock.lock()).await {
        Ok(guard) => Ok(guard),
        Err(_) => {
            warn!(waited_ms = wait.as_millis() as u64, "Participant lock wait exceeded bound");
            Err(EngineError::SubmissionTimeout {
                waited_ms: wait.as_millis() as u64,
            })
        }
    }
}
