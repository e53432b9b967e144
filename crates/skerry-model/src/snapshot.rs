//! Point-in-time view of one torrent's sortable and filterable attributes.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::hash::InfoHash;
use crate::state::TorrentState;

/// Ceiling, in seconds, beyond which the engine's completion estimate means
/// "unknown" rather than a usable duration (100 days).
pub const MAX_ETA_SECS: i64 = 8_640_000;

/// Connected/known tallies for one side of a torrent swarm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerCount {
    /// Peers currently connected.
    pub connected: u32,
    /// Peers known to exist in the swarm.
    pub total: u32,
}

impl PeerCount {
    /// Build a tally from connected/known counts.
    #[must_use]
    pub const fn new(connected: u32, total: u32) -> Self {
        Self { connected, total }
    }
}

/// Read-only capture of one torrent's attributes at a single instant.
///
/// The torrent-state source publishes a fresh snapshot whenever anything about
/// the torrent changes; consumers never mutate snapshots, they replace them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentSnapshot {
    /// Stable identity of the torrent.
    pub id: InfoHash,
    /// Display name.
    pub name: String,
    /// Lifecycle state.
    pub state: TorrentState,
    /// `/`-separated category path; empty when uncategorized.
    #[serde(default)]
    pub category: String,
    /// Labels attached to the torrent, kept sorted.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Tracker endpoints the torrent announces to.
    #[serde(default)]
    pub trackers: HashSet<String>,
    /// Positive when the torrent holds a slot in the transfer queue; zero or
    /// negative otherwise (strictly negative once seeding).
    pub queue_position: i64,
    /// When the torrent was added.
    pub added_on: Option<DateTime<Utc>>,
    /// When the payload finished downloading and seeding began.
    pub completed_on: Option<DateTime<Utc>>,
    /// When the swarm last held a complete copy.
    pub last_seen_complete: Option<DateTime<Utc>>,
    /// Estimated seconds until completion; negative or at least
    /// [`MAX_ETA_SECS`] means no usable estimate.
    pub eta: i64,
    /// Seed tallies for the swarm.
    pub seeds: PeerCount,
    /// Leech tallies for the swarm.
    pub peers: PeerCount,
    /// Per-torrent share-ratio ceiling; negative inherits the global default.
    pub ratio_limit: f64,
    /// Seconds since payload bytes last moved; negative means never.
    pub last_activity: i64,
    /// Total payload size in bytes.
    pub size: u64,
    /// Completion fraction in `0.0..=1.0`.
    pub progress: f64,
    /// All-time share ratio.
    pub ratio: f64,
    /// Current download rate in bytes per second.
    pub download_bps: u64,
    /// Current upload rate in bytes per second.
    pub upload_bps: u64,
}

impl TorrentSnapshot {
    /// Whether payload bytes are moving in either direction right now.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.download_bps > 0 || self.upload_bps > 0
    }

    /// Whether the torrent holds a transfer-queue slot.
    #[must_use]
    pub const fn is_queued(&self) -> bool {
        self.queue_position > 0
    }

    /// Whether the engine's completion estimate is usable for ordering.
    #[must_use]
    pub const fn has_finite_eta(&self) -> bool {
        self.eta >= 0 && self.eta < MAX_ETA_SECS
    }

    /// Whether the torrent carries the given label.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether no category is assigned.
    #[must_use]
    pub const fn is_uncategorized(&self) -> bool {
        self.category.is_empty()
    }

    /// Comma-joined label list, the textual value of the tags column.
    #[must_use]
    pub fn tags_label(&self) -> String {
        let mut label = String::new();
        for tag in &self.tags {
            if !label.is_empty() {
                label.push_str(", ");
            }
            label.push_str(tag);
        }
        label
    }
}
