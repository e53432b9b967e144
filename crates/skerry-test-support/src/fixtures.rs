//! Snapshot builder and timestamp helpers used across the workspace tests.

use chrono::{DateTime, Duration, Utc};
use skerry_model::{InfoHash, PeerCount, TorrentSnapshot, TorrentState};

/// Deterministic timestamp `days` days after the Unix epoch.
#[must_use]
pub fn day(days: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + Duration::days(days)
}

/// Chainable builder producing fully populated snapshots.
///
/// Defaults describe a quiet torrent: stalled download, unqueued, no dates,
/// no labels, unknown ETA, inherited ratio limit, never active.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: TorrentSnapshot,
}

impl SnapshotBuilder {
    /// Start from an id and display name.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            snapshot: TorrentSnapshot {
                id: InfoHash::from(id),
                name: name.to_owned(),
                state: TorrentState::StalledDownloading,
                category: String::new(),
                tags: std::collections::BTreeSet::new(),
                trackers: std::collections::HashSet::new(),
                queue_position: 0,
                added_on: None,
                completed_on: None,
                last_seen_complete: None,
                eta: -1,
                seeds: PeerCount::default(),
                peers: PeerCount::default(),
                ratio_limit: -1.0,
                last_activity: -1,
                size: 0,
                progress: 0.0,
                ratio: 0.0,
                download_bps: 0,
                upload_bps: 0,
            },
        }
    }

    /// Set the lifecycle state.
    #[must_use]
    pub const fn state(mut self, state: TorrentState) -> Self {
        self.snapshot.state = state;
        self
    }

    /// Set the category path.
    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        self.snapshot.category = category.to_owned();
        self
    }

    /// Attach a label.
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        self.snapshot.tags.insert(tag.to_owned());
        self
    }

    /// Announce to a tracker endpoint.
    #[must_use]
    pub fn tracker(mut self, endpoint: &str) -> Self {
        self.snapshot.trackers.insert(endpoint.to_owned());
        self
    }

    /// Set the transfer-queue slot.
    #[must_use]
    pub const fn queue_position(mut self, slot: i64) -> Self {
        self.snapshot.queue_position = slot;
        self
    }

    /// Set the added timestamp.
    #[must_use]
    pub const fn added_on(mut self, at: DateTime<Utc>) -> Self {
        self.snapshot.added_on = Some(at);
        self
    }

    /// Set the completion timestamp.
    #[must_use]
    pub const fn completed_on(mut self, at: DateTime<Utc>) -> Self {
        self.snapshot.completed_on = Some(at);
        self
    }

    /// Set when the swarm last held a full copy.
    #[must_use]
    pub const fn last_seen_complete(mut self, at: DateTime<Utc>) -> Self {
        self.snapshot.last_seen_complete = Some(at);
        self
    }

    /// Set the completion estimate in seconds.
    #[must_use]
    pub const fn eta(mut self, eta: i64) -> Self {
        self.snapshot.eta = eta;
        self
    }

    /// Set the seed tallies.
    #[must_use]
    pub const fn seeds(mut self, seeds: PeerCount) -> Self {
        self.snapshot.seeds = seeds;
        self
    }

    /// Set the leech tallies.
    #[must_use]
    pub const fn peers(mut self, peers: PeerCount) -> Self {
        self.snapshot.peers = peers;
        self
    }

    /// Set the per-torrent share-ratio ceiling.
    #[must_use]
    pub const fn ratio_limit(mut self, limit: f64) -> Self {
        self.snapshot.ratio_limit = limit;
        self
    }

    /// Set seconds since payload bytes last moved.
    #[must_use]
    pub const fn last_activity(mut self, seconds: i64) -> Self {
        self.snapshot.last_activity = seconds;
        self
    }

    /// Set the payload size in bytes.
    #[must_use]
    pub const fn size(mut self, bytes: u64) -> Self {
        self.snapshot.size = bytes;
        self
    }

    /// Set the completion fraction.
    #[must_use]
    pub const fn progress(mut self, progress: f64) -> Self {
        self.snapshot.progress = progress;
        self
    }

    /// Set the all-time share ratio.
    #[must_use]
    pub const fn ratio(mut self, ratio: f64) -> Self {
        self.snapshot.ratio = ratio;
        self
    }

    /// Set current transfer rates in bytes per second.
    #[must_use]
    pub const fn rates(mut self, download_bps: u64, upload_bps: u64) -> Self {
        self.snapshot.download_bps = download_bps;
        self.snapshot.upload_bps = upload_bps;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> TorrentSnapshot {
        self.snapshot
    }
}

/// Builder preset: a torrent downloading at the given queue slot.
#[must_use]
pub fn downloading(id: &str, name: &str, slot: i64) -> SnapshotBuilder {
    SnapshotBuilder::new(id, name)
        .state(TorrentState::Downloading)
        .queue_position(slot)
}

/// Builder preset: a seeding torrent (negative queue slot).
#[must_use]
pub fn seeding(id: &str, name: &str) -> SnapshotBuilder {
    SnapshotBuilder::new(id, name)
        .state(TorrentState::Uploading)
        .queue_position(-1)
}
