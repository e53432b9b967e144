//! Composite filter deciding which torrents belong in the visible list.
//!
//! Four independent axes (status class, category, tag, tracker) combine with
//! logical AND; each axis defaults to accepting everything.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use skerry_model::{CategoryHierarchy, TorrentSnapshot, TorrentState};

/// Status grouping selectable in a sidebar-style status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// Accept every lifecycle state.
    #[default]
    All,
    /// Download-side states, including queued and paused downloads.
    Downloading,
    /// Upload-side states, excluding paused seeds.
    Seeding,
    /// Finished payloads, paused or not.
    Completed,
    /// Stopped by the user.
    Paused,
    /// Not stopped by the user.
    Resumed,
    /// Transferring payload right now.
    Active,
    /// No payload transfer at the moment.
    Inactive,
    /// Stalled in either direction.
    Stalled,
    /// Complete but nobody is downloading.
    StalledUploading,
    /// Incomplete with no data arriving.
    StalledDownloading,
    /// Any piece-verification state.
    Checking,
    /// Storage relocation in progress.
    Moving,
    /// Error or missing-files condition.
    Errored,
}

impl StatusClass {
    /// Whether `torrent` falls into this class.
    #[must_use]
    pub fn matches(self, torrent: &TorrentSnapshot) -> bool {
        match self {
            Self::All => true,
            Self::Downloading => torrent.state.is_downloading(),
            Self::Seeding => torrent.state.is_uploading(),
            Self::Completed => torrent.state.is_completed(),
            Self::Paused => torrent.state.is_paused(),
            Self::Resumed => !torrent.state.is_paused(),
            Self::Active => torrent.is_active(),
            Self::Inactive => !torrent.is_active(),
            Self::Stalled => torrent.state.is_stalled(),
            Self::StalledUploading => torrent.state == TorrentState::StalledUploading,
            Self::StalledDownloading => torrent.state == TorrentState::StalledDownloading,
            Self::Checking => torrent.state.is_checking(),
            Self::Moving => torrent.state == TorrentState::Moving,
            Self::Errored => torrent.state.is_errored(),
        }
    }
}

/// Category axis selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Accept any category, including none.
    #[default]
    Any,
    /// Accept only torrents without a category.
    Uncategorized,
    /// Accept the named category and, per the active hierarchy, its
    /// descendants.
    Category(String),
}

/// Tag axis selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagFilter {
    /// Accept any tag set, including none.
    #[default]
    Any,
    /// Accept only torrents without tags.
    Untagged,
    /// Accept torrents carrying the named tag.
    Tag(String),
}

/// Tracker axis selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerFilter {
    /// Accept any tracker set, including none.
    #[default]
    Any,
    /// Accept torrents announcing to at least one of these endpoints.
    Endpoints(HashSet<String>),
}

/// Composite transfer-list filter: the AND of four independent axes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentFilter {
    /// Status-class axis.
    #[serde(default)]
    pub status: StatusClass,
    /// Category axis.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Tag axis.
    #[serde(default)]
    pub tag: TagFilter,
    /// Tracker axis.
    #[serde(default)]
    pub trackers: TrackerFilter,
}

impl TorrentFilter {
    /// Filter restricted to one status class; other axes stay wide open.
    #[must_use]
    pub fn with_status(status: StatusClass) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Whether `torrent` passes every axis.
    ///
    /// Pure and allocation-free, cheap enough to run for every torrent on
    /// every state tick. Category membership is resolved through `hierarchy`
    /// at call time so concurrent renames of the external tree are honored.
    #[must_use]
    pub fn matches(&self, torrent: &TorrentSnapshot, hierarchy: &dyn CategoryHierarchy) -> bool {
        self.status.matches(torrent)
            && self.matches_category(torrent, hierarchy)
            && self.matches_tag(torrent)
            && self.matches_trackers(torrent)
    }

    fn matches_category(
        &self,
        torrent: &TorrentSnapshot,
        hierarchy: &dyn CategoryHierarchy,
    ) -> bool {
        match &self.category {
            CategoryFilter::Any => true,
            CategoryFilter::Uncategorized => torrent.is_uncategorized(),
            // An empty selector cannot name a category; treat it as unset.
            CategoryFilter::Category(name) if name.is_empty() => true,
            CategoryFilter::Category(name) => {
                hierarchy.is_descendant_or_equal(&torrent.category, name)
            }
        }
    }

    fn matches_tag(&self, torrent: &TorrentSnapshot) -> bool {
        match &self.tag {
            TagFilter::Any => true,
            TagFilter::Untagged => torrent.tags.is_empty(),
            TagFilter::Tag(tag) if tag.is_empty() => true,
            TagFilter::Tag(tag) => torrent.has_tag(tag),
        }
    }

    fn matches_trackers(&self, torrent: &TorrentSnapshot) -> bool {
        match &self.trackers {
            TrackerFilter::Any => true,
            TrackerFilter::Endpoints(endpoints) if endpoints.is_empty() => true,
            TrackerFilter::Endpoints(endpoints) => torrent
                .trackers
                .iter()
                .any(|endpoint| endpoints.contains(endpoint)),
        }
    }
}
