use serde::{Deserialize, Serialize};

use crate::change::{Change, ChangeType};

/// Breakdown of the changes recorded in a change set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSetStats {
    /// Items touched across all records; a range counts once per item
    pub effective_changes: usize,
    pub insert_single: usize,
    pub insert_range: usize,
    pub remove_single: usize,
    pub remove_range: usize,
    pub update_single: usize,
    pub update_range: usize,
    pub moves: usize,
}

impl ChangeSetStats {
    /// Builds stats from a sequence of records.
    pub fn from_changes<'a>(changes: impl IntoIterator<Item = &'a Change>) -> Self {
        let mut stats = Self::default();
        for change in changes {
            stats.record(change);
        }
        stats
    }

    pub(crate) fn record(&mut self, change: &Change) {
        self.effective_changes = self.effective_changes.saturating_add(change.count());

        let slot = match (change.change_type(), change.is_range()) {
            (ChangeType::Insert, false) => &mut self.insert_single,
            (ChangeType::Insert, true) => &mut self.insert_range,
            (ChangeType::Remove, false) => &mut self.remove_single,
            (ChangeType::Remove, true) => &mut self.remove_range,
            (ChangeType::Update, false) => &mut self.update_single,
            (ChangeType::Update, true) => &mut self.update_range,
            (ChangeType::Move, _) => &mut self.moves,
        };
        *slot = slot.saturating_add(1);
    }

    /// Sums two breakdowns.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            effective_changes: self.effective_changes.saturating_add(other.effective_changes),
            insert_single: self.insert_single.saturating_add(other.insert_single),
            insert_range: self.insert_range.saturating_add(other.insert_range),
            remove_single: self.remove_single.saturating_add(other.remove_single),
            remove_range: self.remove_range.saturating_add(other.remove_range),
            update_single: self.update_single.saturating_add(other.update_single),
            update_range: self.update_range.saturating_add(other.update_range),
            moves: self.moves.saturating_add(other.moves),
        }
    }

    /// Number of records counted.
    pub fn record_count(&self) -> usize {
        [
            self.insert_single,
            self.insert_range,
            self.remove_single,
            self.remove_range,
            self.update_single,
            self.update_range,
            self.moves,
        ]
        .into_iter()
        .fold(0, usize::saturating_add)
    }
}
