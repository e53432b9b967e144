//! Stateful ordered/filtered view over the live torrent set.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use skerry_model::{CategoryHierarchy, InfoHash, PathHierarchy, TorrentSnapshot};
use tracing::{debug, trace};

use crate::compare::{SortSpec, compare};
use crate::error::{TransferListError, TransferListResult};
use crate::filter::TorrentFilter;

/// Incremental change to the visible row order.
///
/// Events in one batch replay sequentially: each index is valid once every
/// earlier event in the batch has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowEvent {
    /// A torrent entered the visible list.
    Inserted {
        /// Torrent that appeared.
        id: InfoHash,
        /// Row index it now occupies.
        index: usize,
    },
    /// A torrent left the visible list.
    Removed {
        /// Torrent that disappeared.
        id: InfoHash,
        /// Row index it occupied.
        index: usize,
    },
    /// A visible torrent changed position.
    Moved {
        /// Torrent that moved.
        id: InfoHash,
        /// Row index before the move.
        from: usize,
        /// Row index after the move.
        to: usize,
    },
    /// The whole visible order was rebuilt; consumers re-read it.
    Resorted,
}

/// Live transfer list: filters the tracked torrent set and keeps the
/// survivors sorted under the active column and direction.
///
/// The view owns the latest snapshot of every tracked torrent. Feed engine
/// updates through [`TransferListView::record_changed`] and apply the
/// returned events to the presentation layer; `visible` always reflects the
/// state after the events. All operations are synchronous; callers serialize
/// access.
pub struct TransferListView {
    records: HashMap<InfoHash, TorrentSnapshot>,
    visible: Vec<InfoHash>,
    filter: TorrentFilter,
    sort: SortSpec,
    hierarchy: Arc<dyn CategoryHierarchy>,
}

impl TransferListView {
    /// Empty view with the default filter, queue-position sort and nested
    /// categories.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hierarchy(Arc::new(PathHierarchy))
    }

    /// Empty view with the default filter and sort and the given category
    /// collaborator.
    #[must_use]
    pub fn with_hierarchy(hierarchy: Arc<dyn CategoryHierarchy>) -> Self {
        Self {
            records: HashMap::new(),
            visible: Vec::new(),
            filter: TorrentFilter::default(),
            sort: SortSpec::default(),
            hierarchy,
        }
    }

    /// Visible torrent ids in display order.
    #[must_use]
    pub fn visible(&self) -> &[InfoHash] {
        &self.visible
    }

    /// Number of visible rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether no row is visible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of tracked torrents, visible or not.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.records.len()
    }

    /// Display index of a visible torrent.
    #[must_use]
    pub fn position_of(&self, id: &InfoHash) -> Option<usize> {
        self.visible.iter().position(|visible| visible == id)
    }

    /// Latest snapshot of a tracked torrent.
    #[must_use]
    pub fn snapshot(&self, id: &InfoHash) -> Option<&TorrentSnapshot> {
        self.records.get(id)
    }

    /// Latest snapshots of the visible rows, in display order.
    #[must_use]
    pub fn visible_snapshots(&self) -> impl Iterator<Item = &TorrentSnapshot> {
        self.visible.iter().filter_map(|id| self.records.get(id))
    }

    /// Active filter.
    #[must_use]
    pub const fn filter(&self) -> &TorrentFilter {
        &self.filter
    }

    /// Active sort configuration.
    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Start tracking a torrent.
    ///
    /// # Errors
    ///
    /// Returns [`TransferListError::AlreadyTracked`] when the id is known;
    /// the view is left untouched.
    pub fn record_added(&mut self, snapshot: TorrentSnapshot) -> TransferListResult<Vec<RowEvent>> {
        if self.records.contains_key(&snapshot.id) {
            return Err(TransferListError::AlreadyTracked { id: snapshot.id });
        }

        let mut events = Vec::new();
        if self.accepts(&snapshot) {
            let index = self.insertion_index(&snapshot);
            self.visible.insert(index, snapshot.id.clone());
            events.push(RowEvent::Inserted {
                id: snapshot.id.clone(),
                index,
            });
        }
        debug!(id = %snapshot.id, visible = !events.is_empty(), "torrent tracked");
        self.records.insert(snapshot.id.clone(), snapshot);
        Ok(events)
    }

    /// Stop tracking a torrent.
    ///
    /// # Errors
    ///
    /// Returns [`TransferListError::NotTracked`] when the id is unknown; the
    /// view is left untouched.
    pub fn record_removed(&mut self, id: &InfoHash) -> TransferListResult<Vec<RowEvent>> {
        let Some(snapshot) = self.records.get(id) else {
            return Err(TransferListError::NotTracked { id: id.clone() });
        };

        let mut events = Vec::new();
        if let Some(index) = self.visible_index_of(snapshot) {
            self.visible.remove(index);
            events.push(RowEvent::Removed {
                id: id.clone(),
                index,
            });
        }
        debug!(id = %id, "torrent untracked");
        self.records.remove(id);
        Ok(events)
    }

    /// Apply an updated snapshot for a tracked torrent.
    ///
    /// Re-evaluates filter membership, then repositions the row only when its
    /// neighbors no longer bracket it; an unchanged slot produces no events.
    ///
    /// # Errors
    ///
    /// Returns [`TransferListError::NotTracked`] when the id is unknown; the
    /// view is left untouched.
    pub fn record_changed(
        &mut self,
        snapshot: TorrentSnapshot,
    ) -> TransferListResult<Vec<RowEvent>> {
        let Some(previous) = self.records.get(&snapshot.id) else {
            return Err(TransferListError::NotTracked { id: snapshot.id });
        };
        let old_index = self.visible_index_of(previous);
        let accepted = self.accepts(&snapshot);

        let events = match (old_index, accepted) {
            (None, false) => Vec::new(),
            (None, true) => {
                let index = self.insertion_index(&snapshot);
                self.visible.insert(index, snapshot.id.clone());
                vec![RowEvent::Inserted {
                    id: snapshot.id.clone(),
                    index,
                }]
            }
            (Some(index), false) => {
                self.visible.remove(index);
                vec![RowEvent::Removed {
                    id: snapshot.id.clone(),
                    index,
                }]
            }
            (Some(index), true) => self.reposition(index, &snapshot),
        };

        self.records.insert(snapshot.id.clone(), snapshot);
        Ok(events)
    }

    /// Replace the composite filter, reporting rows that enter or leave.
    ///
    /// Surviving rows keep their relative order. Installing the filter that is
    /// already active is a no-op.
    #[must_use]
    pub fn set_filter(&mut self, filter: TorrentFilter) -> Vec<RowEvent> {
        if self.filter == filter {
            return Vec::new();
        }
        self.filter = filter;
        debug!(tracked = self.records.len(), "transfer filter replaced");
        self.refresh()
    }

    /// Replace the sort configuration, re-sorting the visible rows.
    ///
    /// Membership is untouched. Installing the configuration that is already
    /// active is a no-op, which also makes the operation idempotent.
    #[must_use]
    pub fn set_sort(&mut self, sort: SortSpec) -> Vec<RowEvent> {
        if self.sort == sort {
            return Vec::new();
        }
        self.sort = sort;
        debug!(
            column = ?sort.column,
            direction = ?sort.direction,
            rows = self.visible.len(),
            "transfer sort replaced"
        );

        let target = self.rebuild_visible();
        if self.visible == target {
            return Vec::new();
        }
        self.visible = target;
        vec![RowEvent::Resorted]
    }

    /// Swap the category collaborator (for example when nested categories are
    /// toggled) and re-run membership.
    #[must_use]
    pub fn set_hierarchy(&mut self, hierarchy: Arc<dyn CategoryHierarchy>) -> Vec<RowEvent> {
        self.hierarchy = hierarchy;
        self.refresh()
    }

    /// Recompute membership and order from scratch and emit the difference.
    ///
    /// This is the recovery path for bulk changes the view cannot observe,
    /// such as edits to the external category tree.
    #[must_use]
    pub fn invalidate(&mut self) -> Vec<RowEvent> {
        debug!(tracked = self.records.len(), "transfer list invalidated");
        self.refresh()
    }

    fn accepts(&self, torrent: &TorrentSnapshot) -> bool {
        self.filter.matches(torrent, self.hierarchy.as_ref())
    }

    /// Total display order: column rules, then lexical id. The tie-break is
    /// applied after direction so equivalent rows line up identically under
    /// both directions.
    fn order(&self, a: &TorrentSnapshot, b: &TorrentSnapshot) -> Ordering {
        compare(self.sort, a, b).then_with(|| a.id.cmp(&b.id))
    }

    /// Slot where `torrent` belongs in the current visible order. The id
    /// tie-break in [`Self::order`] makes the position unique.
    fn insertion_index(&self, torrent: &TorrentSnapshot) -> usize {
        self.visible.partition_point(|id| {
            self.records
                .get(id)
                .is_some_and(|existing| self.order(existing, torrent) == Ordering::Less)
        })
    }

    /// Current slot of a visible row, located through the sorted order. Falls
    /// back to a scan when the sorted lookup misses, so a stale order can
    /// never corrupt membership bookkeeping.
    fn visible_index_of(&self, torrent: &TorrentSnapshot) -> Option<usize> {
        let index = self.insertion_index(torrent);
        if self.visible.get(index).is_some_and(|id| *id == torrent.id) {
            return Some(index);
        }
        self.position_of(&torrent.id)
    }

    /// Re-slot a visible row whose attributes changed.
    fn reposition(&mut self, index: usize, updated: &TorrentSnapshot) -> Vec<RowEvent> {
        if self.slot_still_ordered(index, updated) {
            return Vec::new();
        }
        self.visible.remove(index);
        let target = self.insertion_index(updated);
        self.visible.insert(target, updated.id.clone());
        trace!(id = %updated.id, from = index, to = target, "transfer row moved");
        vec![RowEvent::Moved {
            id: updated.id.clone(),
            from: index,
            to: target,
        }]
    }

    /// Whether the updated row may keep its slot: the previous row must still
    /// order strictly before it and the next row strictly after it.
    fn slot_still_ordered(&self, index: usize, updated: &TorrentSnapshot) -> bool {
        let before_ok = index == 0
            || self
                .visible
                .get(index - 1)
                .and_then(|id| self.records.get(id))
                .is_some_and(|left| self.order(left, updated) == Ordering::Less);
        let after_ok = index + 1 >= self.visible.len()
            || self
                .visible
                .get(index + 1)
                .and_then(|id| self.records.get(id))
                .is_some_and(|right| self.order(updated, right) == Ordering::Less);
        before_ok && after_ok
    }

    /// The visible list recomputed from scratch under the current filter and
    /// sort.
    fn rebuild_visible(&self) -> Vec<InfoHash> {
        let mut rows: Vec<&TorrentSnapshot> = self
            .records
            .values()
            .filter(|torrent| self.accepts(torrent))
            .collect();
        rows.sort_unstable_by(|a, b| self.order(a, b));
        rows.into_iter().map(|torrent| torrent.id.clone()).collect()
    }

    /// Diff the current visible list against a fresh rebuild: leavers first,
    /// front to back, then joiners at their final slots, top to bottom. If
    /// the incremental result still differs from the rebuild the view adopts
    /// the rebuild wholesale; the incremental path is never allowed to
    /// diverge.
    fn refresh(&mut self) -> Vec<RowEvent> {
        let target = self.rebuild_visible();
        let mut events = Vec::new();
        let current_set: HashSet<InfoHash> = self.visible.iter().cloned().collect();

        {
            let target_set: HashSet<&InfoHash> = target.iter().collect();
            let mut index = 0;
            while index < self.visible.len() {
                if target_set.contains(&self.visible[index]) {
                    index += 1;
                } else {
                    let id = self.visible.remove(index);
                    events.push(RowEvent::Removed { id, index });
                }
            }
        }

        for (index, id) in target.iter().enumerate() {
            if !current_set.contains(id) {
                self.visible.insert(index, id.clone());
                events.push(RowEvent::Inserted {
                    id: id.clone(),
                    index,
                });
            }
        }

        if self.visible != target {
            self.visible = target;
            events.push(RowEvent::Resorted);
        }
        events
    }
}

impl Default for TransferListView {
    fn default() -> Self {
        Self::new()
    }
}
