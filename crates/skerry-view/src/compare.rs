//! Per-column ordering rules for the transfer list.
//!
//! Every column implements a strict weak ordering over snapshots; the owning
//! view appends a lexical info-hash tie-break to make the order total. Most
//! columns express a single ascending relation that [`compare`] reverses for
//! descending sorts. The exceptions are `Eta`, `RatioLimit` and
//! `LastActivity`, which pin certain rows to the bottom of the displayed list
//! in BOTH directions and therefore consult the direction inside the relation.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skerry_model::{PeerCount, TorrentSnapshot};

use crate::natural::natural_cmp;

/// Sortable transfer-list columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// Torrent display name.
    Name,
    /// Payload size in bytes.
    Size,
    /// Completion fraction.
    Progress,
    /// Lifecycle state ordinal.
    Status,
    /// Connected seeds, then swarm seeds.
    Seeds,
    /// Connected leeches, then swarm leeches.
    Peers,
    /// Download rate.
    DownloadSpeed,
    /// Upload rate.
    UploadSpeed,
    /// Estimated time to completion.
    Eta,
    /// All-time share ratio.
    Ratio,
    /// Category path.
    Category,
    /// Comma-joined tag list.
    Tags,
    /// When the torrent was added.
    AddedOn,
    /// When seeding began.
    CompletedOn,
    /// When the swarm last held a full copy.
    LastSeenComplete,
    /// Transfer-queue slot.
    #[default]
    QueuePosition,
    /// Per-torrent share-ratio ceiling.
    RatioLimit,
    /// Seconds since payload bytes last moved.
    LastActivity,
}

/// Requested sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort configuration: which column, which direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column whose rules order the list.
    pub column: SortColumn,
    /// Direction applied to the column's ascending relation.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Build a spec from column and direction.
    #[must_use]
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Display-order comparison of two snapshots under `spec`.
///
/// `Ordering::Less` means `a` is shown above `b`. For any fixed `spec` the
/// relation is a strict weak ordering; rows it leaves equivalent are expected
/// to be separated by the caller's info-hash tie-break.
#[must_use]
pub fn compare(spec: SortSpec, a: &TorrentSnapshot, b: &TorrentSnapshot) -> Ordering {
    let ascending = compare_ascending(spec, a, b);
    match spec.direction {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}

/// The per-column ascending relation.
///
/// Branches that keep rows at the bottom of the displayed list regardless of
/// direction read `spec.direction` and pre-invert their verdict so the
/// reversal in [`compare`] lands those rows at the bottom either way.
fn compare_ascending(spec: SortSpec, a: &TorrentSnapshot, b: &TorrentSnapshot) -> Ordering {
    match spec.column {
        SortColumn::Name => by_text(&a.name, &b.name, a, b),
        SortColumn::Category => by_text(&a.category, &b.category, a, b),
        SortColumn::Tags => by_text(&a.tags_label(), &b.tags_label(), a, b),
        SortColumn::Status => a.state.cmp(&b.state).then_with(|| by_queue_position(a, b)),
        SortColumn::AddedOn => by_date(a.added_on, b.added_on),
        SortColumn::CompletedOn => by_date(a.completed_on, b.completed_on),
        SortColumn::LastSeenComplete => by_date(a.last_seen_complete, b.last_seen_complete),
        SortColumn::QueuePosition => by_queue_position(a, b),
        SortColumn::Seeds => by_swarm(a.seeds, b.seeds, a, b),
        SortColumn::Peers => by_swarm(a.peers, b.peers, a, b),
        SortColumn::Eta => by_eta(spec.direction, a, b),
        SortColumn::RatioLimit => by_anchored_numeric(
            spec.direction,
            a.ratio_limit < 0.0,
            b.ratio_limit < 0.0,
            a.ratio_limit.total_cmp(&b.ratio_limit),
        ),
        SortColumn::LastActivity => by_anchored_numeric(
            spec.direction,
            a.last_activity < 0,
            b.last_activity < 0,
            a.last_activity.cmp(&b.last_activity),
        ),
        SortColumn::Size => by_value(a.size.cmp(&b.size), a, b),
        SortColumn::Progress => by_value(a.progress.total_cmp(&b.progress), a, b),
        SortColumn::Ratio => by_value(a.ratio.total_cmp(&b.ratio), a, b),
        SortColumn::DownloadSpeed => by_value(a.download_bps.cmp(&b.download_bps), a, b),
        SortColumn::UploadSpeed => by_value(a.upload_bps.cmp(&b.upload_bps), a, b),
    }
}

/// Textual columns: natural case-insensitive order, ties through the queue
/// chain.
fn by_text(lhs: &str, rhs: &str, a: &TorrentSnapshot, b: &TorrentSnapshot) -> Ordering {
    natural_cmp(lhs, rhs).then_with(|| by_queue_position(a, b))
}

/// Date columns: a recorded instant sorts before a missing one.
fn by_date(lhs: Option<DateTime<Utc>>, rhs: Option<DateTime<Utc>>) -> Ordering {
    match (lhs, rhs) {
        (Some(l), Some(r)) => l.cmp(&r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Queue-position chain: queued rows (positive slot) come first, head of the
/// queue on top. Unqueued pairs order by completion date with the validity
/// rule inverted relative to [`by_date`]: rows that never finished rank
/// first. The inversion is intentional and pinned by tests.
fn by_queue_position(a: &TorrentSnapshot, b: &TorrentSnapshot) -> Ordering {
    match (a.is_queued(), b.is_queued()) {
        (true, true) => a.queue_position.cmp(&b.queue_position),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => match (a.completed_on, b.completed_on) {
            (Some(l), Some(r)) => l.cmp(&r),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Swarm columns: connected count, then known total, then the queue chain.
fn by_swarm(lhs: PeerCount, rhs: PeerCount, a: &TorrentSnapshot, b: &TorrentSnapshot) -> Ordering {
    lhs.connected
        .cmp(&rhs.connected)
        .then_with(|| lhs.total.cmp(&rhs.total))
        .then_with(|| by_queue_position(a, b))
}

/// ETA column: activity outranks everything, seeding rows pin to the bottom
/// in both directions, unusable estimates sink below finite ones.
fn by_eta(direction: SortDirection, a: &TorrentSnapshot, b: &TorrentSnapshot) -> Ordering {
    let (left_active, right_active) = (a.is_active(), b.is_active());
    if left_active != right_active {
        return if left_active {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    // Seeding rows (negative queue slot) belong at the bottom of the display
    // whichever direction is requested. A plain relation would float them to
    // the top under descending sorts, so the verdict is pre-inverted against
    // the reversal applied by the caller.
    let (left_seeding, right_seeding) = (a.queue_position < 0, b.queue_position < 0);
    if left_seeding != right_seeding {
        return anchored_last(direction, left_seeding);
    }

    let (left_finite, right_finite) = (a.has_finite_eta(), b.has_finite_eta());
    match (left_finite, right_finite) {
        (true, true) => a.eta.cmp(&b.eta),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) if left_seeding => by_date(a.completed_on, b.completed_on),
        (false, false) => a.queue_position.cmp(&b.queue_position),
    }
}

/// Columns whose negative values are an "unset" sentinel pinned below every
/// real value in both directions. Two sentinels are equivalent.
const fn by_anchored_numeric(
    direction: SortDirection,
    left_negative: bool,
    right_negative: bool,
    value: Ordering,
) -> Ordering {
    match (left_negative, right_negative) {
        (true, true) => Ordering::Equal,
        (false, false) => value,
        (left_is_sentinel, _) => anchored_last(direction, left_is_sentinel),
    }
}

/// Ascending-relation verdict that leaves the flagged row at the bottom of
/// the displayed list once direction is applied.
const fn anchored_last(direction: SortDirection, flagged_is_left: bool) -> Ordering {
    let left_first = match direction {
        SortDirection::Ascending => !flagged_is_left,
        SortDirection::Descending => flagged_is_left,
    };
    if left_first {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Generic numeric columns: the column value, then the queue chain.
fn by_value(by_column: Ordering, a: &TorrentSnapshot, b: &TorrentSnapshot) -> Ordering {
    by_column.then_with(|| by_queue_position(a, b))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use skerry_model::{PeerCount, TorrentState};
    use skerry_test_support::fixtures::{SnapshotBuilder, day};

    use super::{SortColumn, SortDirection, SortSpec, compare};

    fn asc(column: SortColumn) -> SortSpec {
        SortSpec::new(column, SortDirection::Ascending)
    }

    fn desc(column: SortColumn) -> SortSpec {
        SortSpec::new(column, SortDirection::Descending)
    }

    #[test]
    fn name_column_orders_naturally() {
        let early = SnapshotBuilder::new("aa", "Episode 2").build();
        let late = SnapshotBuilder::new("bb", "Episode 10").build();
        assert_eq!(compare(asc(SortColumn::Name), &early, &late), Ordering::Less);
        assert_eq!(
            compare(desc(SortColumn::Name), &early, &late),
            Ordering::Greater
        );
    }

    #[test]
    fn name_ties_fall_through_to_the_queue_chain() {
        let upper = SnapshotBuilder::new("aa", "ABC").queue_position(2).build();
        let lower = SnapshotBuilder::new("bb", "abc").queue_position(1).build();
        assert_eq!(
            compare(asc(SortColumn::Name), &upper, &lower),
            Ordering::Greater
        );
    }

    #[test]
    fn queued_rows_precede_unqueued_rows() {
        let queued = SnapshotBuilder::new("aa", "a").queue_position(3).build();
        let parked = SnapshotBuilder::new("bb", "b").queue_position(0).build();
        assert_eq!(
            compare(asc(SortColumn::QueuePosition), &queued, &parked),
            Ordering::Less
        );
        assert_eq!(
            compare(asc(SortColumn::QueuePosition), &parked, &queued),
            Ordering::Greater
        );
    }

    #[test]
    fn queue_slots_order_head_first() {
        let head = SnapshotBuilder::new("aa", "a").queue_position(1).build();
        let tail = SnapshotBuilder::new("bb", "b").queue_position(7).build();
        assert_eq!(
            compare(asc(SortColumn::QueuePosition), &head, &tail),
            Ordering::Less
        );
    }

    #[test]
    fn unqueued_rows_prefer_missing_completion_dates() {
        // Validity inverted relative to the plain date columns: the row that
        // never finished ranks first.
        let finished = SnapshotBuilder::new("aa", "a")
            .queue_position(-1)
            .completed_on(day(10))
            .build();
        let fresh = SnapshotBuilder::new("bb", "b").queue_position(-2).build();
        assert_eq!(
            compare(asc(SortColumn::QueuePosition), &fresh, &finished),
            Ordering::Less
        );

        let earlier = SnapshotBuilder::new("cc", "c")
            .queue_position(-1)
            .completed_on(day(3))
            .build();
        assert_eq!(
            compare(asc(SortColumn::QueuePosition), &earlier, &finished),
            Ordering::Less
        );
    }

    #[test]
    fn status_column_compares_state_ordinals() {
        let downloading = SnapshotBuilder::new("aa", "a")
            .state(TorrentState::Downloading)
            .build();
        let seeding = SnapshotBuilder::new("bb", "b")
            .state(TorrentState::Uploading)
            .build();
        assert_eq!(
            compare(asc(SortColumn::Status), &downloading, &seeding),
            Ordering::Less
        );

        let queued_first = SnapshotBuilder::new("cc", "c")
            .state(TorrentState::Downloading)
            .queue_position(1)
            .build();
        let queued_second = SnapshotBuilder::new("dd", "d")
            .state(TorrentState::Downloading)
            .queue_position(2)
            .build();
        assert_eq!(
            compare(asc(SortColumn::Status), &queued_first, &queued_second),
            Ordering::Less
        );
    }

    #[test]
    fn date_columns_put_missing_values_last() {
        let dated = SnapshotBuilder::new("aa", "a").added_on(day(5)).build();
        let undated = SnapshotBuilder::new("bb", "b").build();
        assert_eq!(
            compare(asc(SortColumn::AddedOn), &dated, &undated),
            Ordering::Less
        );

        let older = SnapshotBuilder::new("cc", "c").added_on(day(1)).build();
        assert_eq!(
            compare(asc(SortColumn::AddedOn), &older, &dated),
            Ordering::Less
        );
        assert_eq!(
            compare(asc(SortColumn::AddedOn), &undated, &undated),
            Ordering::Equal
        );
    }

    #[test]
    fn swarm_columns_chain_connected_then_total() {
        let more_connected = SnapshotBuilder::new("aa", "a")
            .seeds(PeerCount::new(4, 10))
            .build();
        let more_known = SnapshotBuilder::new("bb", "b")
            .seeds(PeerCount::new(2, 50))
            .build();
        assert_eq!(
            compare(asc(SortColumn::Seeds), &more_known, &more_connected),
            Ordering::Less
        );

        let same_connected = SnapshotBuilder::new("cc", "c")
            .seeds(PeerCount::new(4, 12))
            .build();
        assert_eq!(
            compare(asc(SortColumn::Seeds), &more_connected, &same_connected),
            Ordering::Less
        );
    }

    #[test]
    fn eta_activity_outranks_estimates() {
        let busy_long = SnapshotBuilder::new("aa", "a")
            .rates(1024, 0)
            .eta(5000)
            .build();
        let idle_short = SnapshotBuilder::new("bb", "b").eta(10).build();
        assert_eq!(
            compare(asc(SortColumn::Eta), &busy_long, &idle_short),
            Ordering::Less
        );
        // Unlike the seeding tier, the activity tier is not anchored: it
        // reverses with the direction like any plain comparison.
        assert_eq!(
            compare(desc(SortColumn::Eta), &busy_long, &idle_short),
            Ordering::Greater
        );
    }

    #[test]
    fn eta_seeding_rows_anchor_to_the_bottom_in_both_directions() {
        let downloading = SnapshotBuilder::new("aa", "a")
            .queue_position(1)
            .eta(600)
            .build();
        let seeding = SnapshotBuilder::new("bb", "b").queue_position(-1).build();

        assert_eq!(
            compare(asc(SortColumn::Eta), &downloading, &seeding),
            Ordering::Less
        );
        assert_eq!(
            compare(desc(SortColumn::Eta), &downloading, &seeding),
            Ordering::Less
        );
    }

    #[test]
    fn eta_unusable_estimates_sink_below_finite_ones() {
        let finite = SnapshotBuilder::new("aa", "a").eta(3600).build();
        let unknown = SnapshotBuilder::new("bb", "b").eta(-1).build();
        let saturated = SnapshotBuilder::new("cc", "c").eta(8_640_000).build();

        assert_eq!(
            compare(asc(SortColumn::Eta), &finite, &unknown),
            Ordering::Less
        );
        assert_eq!(
            compare(asc(SortColumn::Eta), &finite, &saturated),
            Ordering::Less
        );
    }

    #[test]
    fn eta_pairs_without_estimates_use_their_tier_tiebreaks() {
        // Two seeding rows: the plain completion-date rule, recorded first.
        let seasoned = SnapshotBuilder::new("aa", "a")
            .queue_position(-1)
            .completed_on(day(2))
            .build();
        let fresh = SnapshotBuilder::new("bb", "b").queue_position(-2).build();
        assert_eq!(compare(asc(SortColumn::Eta), &seasoned, &fresh), Ordering::Less);

        // Two non-seeding rows: raw queue positions, including zero.
        let parked = SnapshotBuilder::new("cc", "c").queue_position(0).eta(-1).build();
        let queued = SnapshotBuilder::new("dd", "d").queue_position(4).eta(-1).build();
        assert_eq!(compare(asc(SortColumn::Eta), &parked, &queued), Ordering::Less);
    }

    #[test]
    fn eta_finite_pairs_compare_numerically() {
        let short = SnapshotBuilder::new("aa", "a").eta(60).build();
        let long = SnapshotBuilder::new("bb", "b").eta(7200).build();
        assert_eq!(compare(asc(SortColumn::Eta), &short, &long), Ordering::Less);
        assert_eq!(compare(desc(SortColumn::Eta), &short, &long), Ordering::Greater);
    }

    #[test]
    fn ratio_limit_sentinel_anchors_last_in_both_directions() {
        let capped = SnapshotBuilder::new("aa", "a").ratio_limit(2.0).build();
        let inherited = SnapshotBuilder::new("bb", "b").ratio_limit(-1.0).build();

        assert_eq!(
            compare(asc(SortColumn::RatioLimit), &capped, &inherited),
            Ordering::Less
        );
        assert_eq!(
            compare(desc(SortColumn::RatioLimit), &capped, &inherited),
            Ordering::Less
        );

        let other = SnapshotBuilder::new("cc", "c").ratio_limit(-2.0).build();
        assert_eq!(
            compare(asc(SortColumn::RatioLimit), &inherited, &other),
            Ordering::Equal
        );
    }

    #[test]
    fn ratio_limit_real_values_still_reverse() {
        let low = SnapshotBuilder::new("aa", "a").ratio_limit(0.5).build();
        let high = SnapshotBuilder::new("bb", "b").ratio_limit(3.0).build();
        assert_eq!(
            compare(asc(SortColumn::RatioLimit), &low, &high),
            Ordering::Less
        );
        assert_eq!(
            compare(desc(SortColumn::RatioLimit), &low, &high),
            Ordering::Greater
        );
    }

    #[test]
    fn last_activity_never_active_anchors_last_in_both_directions() {
        let recent = SnapshotBuilder::new("aa", "a").last_activity(30).build();
        let never = SnapshotBuilder::new("bb", "b").last_activity(-1).build();

        assert_eq!(
            compare(asc(SortColumn::LastActivity), &recent, &never),
            Ordering::Less
        );
        assert_eq!(
            compare(desc(SortColumn::LastActivity), &recent, &never),
            Ordering::Less
        );

        let stale = SnapshotBuilder::new("cc", "c").last_activity(9000).build();
        assert_eq!(
            compare(asc(SortColumn::LastActivity), &recent, &stale),
            Ordering::Less
        );
    }

    #[test]
    fn numeric_columns_tie_break_through_the_queue_chain() {
        let queued = SnapshotBuilder::new("aa", "a")
            .size(1000)
            .queue_position(1)
            .build();
        let parked = SnapshotBuilder::new("bb", "b").size(1000).build();
        assert_eq!(
            compare(asc(SortColumn::Size), &queued, &parked),
            Ordering::Less
        );

        let smaller = SnapshotBuilder::new("cc", "c").size(10).build();
        assert_eq!(
            compare(asc(SortColumn::Size), &smaller, &queued),
            Ordering::Less
        );
    }

    #[test]
    fn progress_and_ratio_handle_fractionals() {
        let behind = SnapshotBuilder::new("aa", "a").progress(0.25).build();
        let ahead = SnapshotBuilder::new("bb", "b").progress(0.75).build();
        assert_eq!(
            compare(asc(SortColumn::Progress), &behind, &ahead),
            Ordering::Less
        );

        let low = SnapshotBuilder::new("cc", "c").ratio(0.1).build();
        let high = SnapshotBuilder::new("dd", "d").ratio(2.5).build();
        assert_eq!(compare(desc(SortColumn::Ratio), &high, &low), Ordering::Less);
    }

    #[test]
    fn category_and_tags_columns_order_textually() {
        let action = SnapshotBuilder::new("aa", "a").category("Movies/Action").build();
        let drama = SnapshotBuilder::new("bb", "b").category("Movies/Drama").build();
        assert_eq!(
            compare(asc(SortColumn::Category), &action, &drama),
            Ordering::Less
        );

        let tagged_early = SnapshotBuilder::new("cc", "c").tag("anime").build();
        let tagged_late = SnapshotBuilder::new("dd", "d").tag("linux").build();
        assert_eq!(
            compare(asc(SortColumn::Tags), &tagged_early, &tagged_late),
            Ordering::Less
        );
    }

    #[test]
    fn direction_reversal_swaps_every_plain_verdict() {
        let small = SnapshotBuilder::new("aa", "a").size(10).build();
        let large = SnapshotBuilder::new("bb", "b").size(99).build();
        let spec = asc(SortColumn::Size);
        let flipped = SortSpec::new(SortColumn::Size, spec.direction.reversed());
        assert_eq!(
            compare(spec, &small, &large),
            compare(flipped, &small, &large).reverse()
        );
    }
}
