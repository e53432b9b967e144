//! Torrent lifecycle states and the class predicates derived from them.

use serde::{Deserialize, Serialize};

/// Lifecycle state reported by the download engine for one torrent.
///
/// Declaration order is load-bearing: the status sort column compares states
/// by this ordinal, so new variants must be appended with display order in
/// mind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorrentState {
    /// Payload pieces are being transferred.
    Downloading,
    /// Magnet metadata is still being fetched.
    DownloadingMetadata,
    /// Download forced past the queue limits.
    ForcedDownloading,
    /// Download wants peers but nothing is arriving.
    StalledDownloading,
    /// Pieces are being re-verified while incomplete.
    CheckingDownloading,
    /// Waiting for a download slot.
    QueuedDownloading,
    /// Download stopped by the user.
    PausedDownloading,
    /// Complete and uploading to peers.
    Uploading,
    /// Upload forced past the queue limits.
    ForcedUploading,
    /// Complete but nobody is downloading.
    StalledUploading,
    /// Pieces are being re-verified while complete.
    CheckingUploading,
    /// Waiting for an upload slot.
    QueuedUploading,
    /// Complete and stopped by the user.
    PausedUploading,
    /// Resume data is being verified at startup.
    CheckingResumeData,
    /// Storage is being relocated.
    Moving,
    /// Payload files disappeared from disk.
    MissingFiles,
    /// The engine reported a fatal per-torrent error.
    Errored,
}

impl TorrentState {
    /// Whether the torrent is on the download side of its lifecycle.
    #[must_use]
    pub const fn is_downloading(self) -> bool {
        matches!(
            self,
            Self::Downloading
                | Self::DownloadingMetadata
                | Self::ForcedDownloading
                | Self::StalledDownloading
                | Self::CheckingDownloading
                | Self::QueuedDownloading
                | Self::PausedDownloading
        )
    }

    /// Whether the torrent is on the upload side and not stopped.
    #[must_use]
    pub const fn is_uploading(self) -> bool {
        matches!(
            self,
            Self::Uploading
                | Self::ForcedUploading
                | Self::StalledUploading
                | Self::CheckingUploading
                | Self::QueuedUploading
        )
    }

    /// Whether the payload finished downloading, stopped or not.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        self.is_uploading() || matches!(self, Self::PausedUploading)
    }

    /// Whether the torrent was stopped by the user.
    #[must_use]
    pub const fn is_paused(self) -> bool {
        matches!(self, Self::PausedDownloading | Self::PausedUploading)
    }

    /// Whether either stalled state applies.
    #[must_use]
    pub const fn is_stalled(self) -> bool {
        matches!(self, Self::StalledDownloading | Self::StalledUploading)
    }

    /// Whether any piece-verification state applies.
    #[must_use]
    pub const fn is_checking(self) -> bool {
        matches!(
            self,
            Self::CheckingDownloading | Self::CheckingUploading | Self::CheckingResumeData
        )
    }

    /// Whether the torrent is in an error condition.
    #[must_use]
    pub const fn is_errored(self) -> bool {
        matches!(self, Self::MissingFiles | Self::Errored)
    }

    /// Machine-friendly name matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Downloading => "downloading",
            Self::DownloadingMetadata => "downloading_metadata",
            Self::ForcedDownloading => "forced_downloading",
            Self::StalledDownloading => "stalled_downloading",
            Self::CheckingDownloading => "checking_downloading",
            Self::QueuedDownloading => "queued_downloading",
            Self::PausedDownloading => "paused_downloading",
            Self::Uploading => "uploading",
            Self::ForcedUploading => "forced_uploading",
            Self::StalledUploading => "stalled_uploading",
            Self::CheckingUploading => "checking_uploading",
            Self::QueuedUploading => "queued_uploading",
            Self::PausedUploading => "paused_uploading",
            Self::CheckingResumeData => "checking_resume_data",
            Self::Moving => "moving",
            Self::MissingFiles => "missing_files",
            Self::Errored => "errored",
        }
    }
}
