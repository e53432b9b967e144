//! Error types surfaced by transfer-list mutations.

use skerry_model::InfoHash;
use thiserror::Error;

/// Convenient alias for view results.
pub type TransferListResult<T> = Result<T, TransferListError>;

/// Errors reported by [`crate::view::TransferListView`] mutations.
///
/// Every failing mutation leaves the view untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferListError {
    /// The operation referenced a torrent the view does not track.
    #[error("torrent not tracked")]
    NotTracked {
        /// Identifier that failed the lookup.
        id: InfoHash,
    },
    /// An add carried an identifier that is already tracked.
    #[error("torrent already tracked")]
    AlreadyTracked {
        /// Identifier that collided.
        id: InfoHash,
    },
}
