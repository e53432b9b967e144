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

//! Ordering and filtering engine for a live torrent transfer list.
//!
//! Feed the latest `TorrentSnapshot` for every tracked torrent into a
//! [`TransferListView`] and it maintains the visible, sorted row order
//! incrementally, emitting [`RowEvent`]s a presentation layer applies as row
//! inserts, removes and moves.
//!
//! Layout: `filter.rs` (per-axis predicates and their composition),
//! `compare.rs` (per-column comparator and tie-break chains), `natural.rs`
//! (digit-aware string ordering), `view.rs` (the stateful view and its row
//! events), `error.rs`.

pub mod compare;
pub mod error;
pub mod filter;
pub mod natural;
pub mod view;

pub use compare::{SortColumn, SortDirection, SortSpec, compare};
pub use error::{TransferListError, TransferListResult};
pub use filter::{CategoryFilter, StatusClass, TagFilter, TorrentFilter, TrackerFilter};
pub use natural::natural_cmp;
pub use view::{RowEvent, TransferListView};
