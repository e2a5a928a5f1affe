//! Rank index
//!
//! Maintains a total order over all score records using the comparator:
//! score descending, elapsed_time ascending, participant_id ascending.
//! The visible view is limited to the top N, but the full order is kept so
//! any participant's rank can be answered (a submitter needs their own rank
//! back even when outside the visible view).

use std::collections::HashMap;

use types::ids::ParticipantId;
use types::rank::RankEntry;
use types::score::ScoreRecord;

/// Owned, lock-guarded ranking structure. The coordinator holds it behind a
/// mutex so every rebuild/publish pair is one atomic step.
#[derive(Debug)]
pub struct RankIndex {
    /// Full dense ranking, best first.
    entries: Vec<RankEntry>,
    /// Rank (1-based) by participant, covering all entries, not only top N.
    positions: HashMap<ParticipantId, u32>,
    /// Size of the visible view.
    top_n: usize,
}

impl RankIndex {
    pub fn new(top_n: usize) -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            top_n,
        }
    }

    /// Rebuild the full order from an unordered record listing.
    ///
    /// `resolve_name` maps a participant to a display name for the
    /// projection.
    pub fn rebuild<F>(&mut self, mut records: Vec<ScoreRecord>, resolve_name: F)
    where
        F: Fn(ParticipantId) -> String,
    {
        records.sort_by_key(|r| r.rank_key());

        self.positions.clear();
        self.entries.clear();
        self.entries.reserve(records.len());

        for (idx, record) in records.into_iter().enumerate() {
            let rank = (idx + 1) as u32;
            self.positions.insert(record.participant_id, rank);
            self.entries.push(RankEntry {
                participant_id: record.participant_id,
                display_name: resolve_name(record.participant_id),
                score: record.score,
                elapsed_time: record.elapsed_time,
                rank,
            });
        }
    }

    /// Drop all entries (administrative reset).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// The visible top-N view, best first.
    pub fn top(&self) -> Vec<RankEntry> {
        self.entries.iter().take(self.top_n).cloned().collect()
    }

    /// Rank of any ranked participant, inside or outside the top N.
    pub fn rank_of(&self, participant_id: ParticipantId) -> Option<u32> {
        self.positions.get(&participant_id).copied()
    }

    /// Number of ranked participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use types::ids::GameId;

    fn record(pid: ParticipantId, score: u64, elapsed: u64) -> ScoreRecord {
        ScoreRecord::new(pid, GameId::new("quiz_blitz"), score, elapsed, Utc::now())
    }

    fn rebuild(index: &mut RankIndex, records: Vec<ScoreRecord>) {
        index.rebuild(records, |pid| pid.to_string());
    }

    #[test]
    fn test_ranks_are_dense() {
        let mut index = RankIndex::new(10);
        rebuild(
            &mut index,
            vec![
                record(ParticipantId::new(), 80, 30),
                record(ParticipantId::new(), 50, 20),
                record(ParticipantId::new(), 95, 12),
            ],
        );

        let ranks: Vec<u32> = index.top().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_comparator_ordering() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let c = ParticipantId::new();
        let mut index = RankIndex::new(10);
        rebuild(
            &mut index,
            vec![
                record(a, 80, 30), // same score as b, slower
                record(b, 80, 25),
                record(c, 95, 40),
            ],
        );

        let top = index.top();
        assert_eq!(top[0].participant_id, c); // highest score
        assert_eq!(top[1].participant_id, b); // tie broken by speed
        assert_eq!(top[2].participant_id, a);
    }

    #[test]
    fn test_identical_results_tie_broken_by_participant_id() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let (first, second) = if a < b { (a, b) } else { (b, a) };

        let mut index = RankIndex::new(10);
        rebuild(&mut index, vec![record(second, 80, 30), record(first, 80, 30)]);

        let top = index.top();
        assert_eq!(top[0].participant_id, first);
        assert_eq!(top[1].participant_id, second);
    }

    #[test]
    fn test_top_view_is_limited_but_ranks_are_not() {
        let mut index = RankIndex::new(2);
        let outside = ParticipantId::new();
        rebuild(
            &mut index,
            vec![
                record(ParticipantId::new(), 90, 10),
                record(ParticipantId::new(), 70, 10),
                record(outside, 10, 10),
            ],
        );

        assert_eq!(index.top().len(), 2);
        assert_eq!(index.len(), 3);
        // Participant outside the visible view still has an answerable rank
        assert_eq!(index.rank_of(outside), Some(3));
    }

    #[test]
    fn test_rank_of_unranked_participant() {
        let index = RankIndex::new(10);
        assert_eq!(index.rank_of(ParticipantId::new()), None);
    }

    #[test]
    fn test_clear() {
        let mut index = RankIndex::new(10);
        let pid = ParticipantId::new();
        rebuild(&mut index, vec![record(pid, 80, 30)]);
        assert_eq!(index.len(), 1);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.rank_of(pid), None);
    }

    proptest! {
        /// Rebuilding from any set of records ranks them exactly as sorting
        /// by the comparator would.
        #[test]
        fn prop_rebuild_matches_comparator_sort(
            results in prop::collection::vec((0u64..500, 0u64..500), 0..40)
        ) {
            let records: Vec<ScoreRecord> = results
                .into_iter()
                .map(|(score, elapsed)| record(ParticipantId::new(), score, elapsed))
                .collect();

            let mut expected = records.clone();
            expected.sort_by_key(|r| r.rank_key());

            let mut index = RankIndex::new(usize::MAX);
            rebuild(&mut index, records);

            let got: Vec<ParticipantId> =
                index.top().iter().map(|e| e.participant_id).collect();
            let want: Vec<ParticipantId> =
                expected.iter().map(|r| r.participant_id).collect();
            prop_assert_eq!(got, want);

            // Dense 1..K with no gaps
            for (i, entry) in index.top().iter().enumerate() {
                prop_assert_eq!(entry.rank, (i + 1) as u32);
            }
        }
    }
}
