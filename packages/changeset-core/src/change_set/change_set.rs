use crate::change::{Change, ChangeType};
use crate::error::{ChangeSetError, Result};

use super::pool::ChangeSetPool;
use super::stats::ChangeSetStats;

/// Ordered log of changes plus the size of the sequence they produce.
///
/// `count` is the logical length of the sequence after every recorded change
/// is applied; `change_count` is the number of records. A single range change
/// moves `count` by its whole span but adds one record.
///
/// Indices are trusted: the log does not check that a change addresses an
/// existing position.
#[derive(Debug)]
pub struct ChangeSet {
    /// Recorded changes in append order
    pub(super) changes: Vec<Change>,
    /// Logical sequence length after all changes
    count: usize,
    /// Per-type breakdown, present when stats tracking is enabled
    stats: Option<ChangeSetStats>,
}

impl ChangeSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            changes: Vec::with_capacity(capacity),
            count: 0,
            stats: None,
        }
    }

    /// Acquires a clean change set from the global pool.
    ///
    /// # Arguments
    /// * `initial_count` - Size of the sequence before any change (default 0)
    pub fn acquire(initial_count: Option<usize>) -> Self {
        ChangeSetPool::global().acquire(initial_count)
    }

    /// Returns this change set to the global pool.
    pub fn release(self) {
        ChangeSetPool::global().release(self);
    }

    pub(crate) fn reset(&mut self, initial_count: usize, enable_stats: bool) {
        self.changes.clear();
        self.count = initial_count;
        self.stats = enable_stats.then(ChangeSetStats::default);
    }

    pub(crate) fn clear(&mut self, max_retained_capacity: usize) {
        self.changes.clear();
        if self.changes.capacity() > max_retained_capacity {
            self.changes.shrink_to(max_retained_capacity);
        }
        self.count = 0;
        self.stats = None;
    }

    /// Appends a change and updates the logical count.
    ///
    /// Inserts grow the count by their span, removes shrink it by their span,
    /// updates and moves leave it unchanged.
    ///
    /// # Errors
    /// `CountUnderflow` if a remove spans more items than the sequence holds,
    /// `CapacityOverflow` if an insert overflows the count. The change set is
    /// unchanged on error.
    pub fn add_change(&mut self, change: Change) -> Result<()> {
        let count = match change.change_type() {
            ChangeType::Insert => {
                self.count
                    .checked_add(change.count())
                    .ok_or(ChangeSetError::CapacityOverflow {
                        operation: "insert",
                    })?
            }
            ChangeType::Remove => match self.count.checked_sub(change.count()) {
                Some(count) => count,
                None => {
                    tracing::warn!(
                        count = self.count,
                        removed = change.count(),
                        index = change.index(),
                        "Rejected remove past the end of the sequence"
                    );
                    return Err(ChangeSetError::CountUnderflow {
                        count: self.count,
                        removed: change.count(),
                    });
                }
            },
            ChangeType::Update | ChangeType::Move => self.count,
        };

        self.append(change, count);
        Ok(())
    }

    /// Appends a move of the item at `from_index` to `to_index`.
    pub fn move_item(&mut self, from_index: usize, to_index: usize) {
        let count = self.count;
        self.append(Change::move_item(from_index, to_index), count);
    }

    fn append(&mut self, change: Change, count: usize) {
        if let Some(stats) = self.stats.as_mut() {
            stats.record(&change);
        }
        self.count = count;
        self.changes.push(change);
    }

    /// Logical length of the sequence after all recorded changes.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of recorded changes.
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` if no change has been recorded.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns the change recorded at position `index` in append order.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= change_count()`.
    pub fn change_at(&self, index: usize) -> Result<&Change> {
        self.changes
            .get(index)
            .ok_or(ChangeSetError::IndexOutOfRange {
                index,
                len: self.changes.len(),
            })
    }

    /// All recorded changes in append order.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    /// Per-type breakdown, if stats tracking is enabled for this instance.
    pub fn stats(&self) -> Option<&ChangeSetStats> {
        self.stats.as_ref()
    }

    /// Concatenates two change sets.
    ///
    /// The result holds copies of `first`'s changes followed by copies of
    /// `second`'s changes with every index (including a move's destination)
    /// shifted by `first.count()`, so that `second`, computed against a
    /// zero-based sequence, addresses the items placed after `first`'s.
    /// Neither input is modified. The result is always acquired from the
    /// global pool, whichever pool the inputs came from; use
    /// [`ChangeSetPool::merge`] to acquire it from a specific pool.
    ///
    /// # Errors
    /// `CapacityOverflow` if the combined count or a shifted index does not
    /// fit in `usize`.
    pub fn merge(first: &ChangeSet, second: &ChangeSet) -> Result<ChangeSet> {
        Self::merge_from(ChangeSetPool::global(), first, second)
    }

    pub(crate) fn merge_from(
        pool: &ChangeSetPool,
        first: &ChangeSet,
        second: &ChangeSet,
    ) -> Result<ChangeSet> {
        let offset = first.count;
        let count = first
            .count
            .checked_add(second.count)
            .ok_or(ChangeSetError::CapacityOverflow { operation: "merge" })?;
        let shifted = second
            .changes
            .iter()
            .map(|change| change.offset_by(offset))
            .collect::<Result<Vec<_>>>()?;

        let mut merged = pool.acquire(Some(count));
        merged.changes.reserve(first.changes.len() + shifted.len());
        merged.changes.extend(first.changes.iter().cloned());
        merged.changes.extend(shifted);

        if merged.stats.is_some() || first.stats.is_some() || second.stats.is_some() {
            merged.stats = Some(first.stats_or_computed().merge(&second.stats_or_computed()));
        }

        tracing::debug!(
            first_changes = first.change_count(),
            second_changes = second.change_count(),
            offset,
            count,
            "Merged change sets"
        );

        Ok(merged)
    }

    fn stats_or_computed(&self) -> ChangeSetStats {
        self.stats
            .unwrap_or_else(|| ChangeSetStats::from_changes(&self.changes))
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
