//! Broadcast hub
//!
//! Fan-out of rank snapshots to all subscribed viewers. Built on a watch
//! channel: each subscriber always observes the latest snapshot, so rapid
//! successive updates coalesce into the newest one (last-write-wins). That
//! trade is safe because the payload is always a full snapshot, never a
//! diff. A viewer that disconnects simply drops its receiver; publishing
//! never blocks on a slow or dead subscriber.

use tokio::sync::watch;
use tracing::debug;
use types::rank::{RankEntry, RankSnapshot};

/// Snapshot fan-out channel.
///
/// `publish` must be externally serialized (the coordinator calls it while
/// holding the rank index lock) so generations match the index order.
#[derive(Debug)]
pub struct BroadcastHub {
    tx: watch::Sender<RankSnapshot>,
    /// Last generation handed out. Guarded by the caller's serialization.
    generation: std::sync::atomic::AtomicU64,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(RankSnapshot::empty(0)),
            generation: std::sync::atomic::AtomicU64::new(0),
        }
    }

    /// Push a new snapshot to every live subscriber.
    pub fn publish(&self, entries: Vec<RankEntry>) -> u64 {
        let generation = self
            .generation
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            + 1;
        debug!(generation, entries = entries.len(), "Publishing rank snapshot");
        self.tx.send_replace(RankSnapshot { entries, generation });
        generation
    }

    /// Open a subscription. The first `recv` resolves immediately with the
    /// snapshot current at join time.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
            last_seen: None,
        }
    }

    /// Snapshot current right now (initial fetch path).
    pub fn current(&self) -> RankSnapshot {
        self.tx.borrow().clone()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new()
    }
}

/// A viewer's handle on the snapshot stream.
///
/// Delivery is ordered: generations observed through `recv` strictly
/// increase. Intermediate generations may be skipped when publishes
/// coalesce.
#[derive(Debug)]
pub struct Subscription {
    rx: watch::Receiver<RankSnapshot>,
    last_seen: Option<u64>,
}

impl Subscription {
    /// Wait for the next snapshot. Returns `None` once the hub is gone.
    pub async fn recv(&mut self) -> Option<RankSnapshot> {
        loop {
            let snapshot = self.rx.borrow_and_update().clone();
            let is_new = match self.last_seen {
                None => true,
                Some(seen) => snapshot.generation > seen,
            };
            if is_new {
                self.last_seen = Some(snapshot.generation);
                return Some(snapshot);
            }
            if self.rx.changed().await.is_err() {
                return None;
            }
        }
    }
}
