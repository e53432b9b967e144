#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared torrent domain types consumed by the transfer-list engine.
//!
//! Layout: `hash.rs` (torrent identity), `state.rs` (lifecycle states and the
//! class predicates derived from them), `snapshot.rs` (point-in-time attribute
//! view of one torrent), `category.rs` (category hierarchy collaborator).

pub mod category;
pub mod hash;
pub mod snapshot;
pub mod state;

pub use category::{CategoryHierarchy, FlatHierarchy, PathHierarchy};
pub use hash::InfoHash;
pub use snapshot::{MAX_ETA_SECS, PeerCount, TorrentSnapshot};
pub use state::TorrentState;
