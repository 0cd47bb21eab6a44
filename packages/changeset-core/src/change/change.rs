use serde::{Deserialize, Serialize};

use crate::error::{ChangeSetError, Result};

use super::render_info::RenderInfo;

/// Kind of edit a [`Change`] records.
///
/// Range operations share the kind of their single-item counterpart and are
/// distinguished by [`Change::count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// New items inserted at `index`
    Insert,
    /// Items at `index` replaced in place
    Update,
    /// Items at `index` removed
    Remove,
    /// Single item moved from `index` to `to_index`
    Move,
}

/// One recorded edit to an ordered sequence.
///
/// Built through the named constructors and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    change_type: ChangeType,
    index: usize,
    to_index: Option<usize>,
    count: usize,
    render_infos: Vec<RenderInfo>,
}

impl Change {
    /// Inserts a single item at `index`.
    pub fn insert(index: usize, render_info: RenderInfo) -> Self {
        Self::single(ChangeType::Insert, index, Some(render_info))
    }

    /// Inserts `count` contiguous items starting at `index`.
    ///
    /// # Errors
    /// `InvalidCount` if `count` is zero, `PayloadLengthMismatch` if
    /// `render_infos.len() != count`.
    pub fn insert_range(
        index: usize,
        count: usize,
        render_infos: Vec<RenderInfo>,
    ) -> Result<Self> {
        Self::ranged(ChangeType::Insert, index, count, render_infos)
    }

    /// Replaces the item at `index`.
    pub fn update(index: usize, render_info: RenderInfo) -> Self {
        Self::single(ChangeType::Update, index, Some(render_info))
    }

    /// Replaces `count` contiguous items starting at `index`.
    ///
    /// # Errors
    /// Same as [`Change::insert_range`].
    pub fn update_range(
        index: usize,
        count: usize,
        render_infos: Vec<RenderInfo>,
    ) -> Result<Self> {
        Self::ranged(ChangeType::Update, index, count, render_infos)
    }

    /// Removes the item at `index`.
    pub fn remove(index: usize) -> Self {
        Self::single(ChangeType::Remove, index, None)
    }

    /// Removes `count` contiguous items starting at `index`.
    ///
    /// # Errors
    /// `InvalidCount` if `count` is zero.
    pub fn remove_range(index: usize, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(ChangeSetError::InvalidCount { count });
        }

        Ok(Self {
            change_type: ChangeType::Remove,
            index,
            to_index: None,
            count,
            render_infos: Vec::new(),
        })
    }

    /// Moves the item at `from_index` to `to_index`.
    pub fn move_item(from_index: usize, to_index: usize) -> Self {
        Self {
            change_type: ChangeType::Move,
            index: from_index,
            to_index: Some(to_index),
            count: 1,
            render_infos: Vec::new(),
        }
    }

    fn single(change_type: ChangeType, index: usize, render_info: Option<RenderInfo>) -> Self {
        Self {
            change_type,
            index,
            to_index: None,
            count: 1,
            render_infos: render_info.into_iter().collect(),
        }
    }

    fn ranged(
        change_type: ChangeType,
        index: usize,
        count: usize,
        render_infos: Vec<RenderInfo>,
    ) -> Result<Self> {
        if count == 0 {
            return Err(ChangeSetError::InvalidCount { count });
        }

        if render_infos.len() != count {
            return Err(ChangeSetError::PayloadLengthMismatch {
                expected: count,
                got: render_infos.len(),
            });
        }

        Ok(Self {
            change_type,
            index,
            to_index: None,
            count,
            render_infos,
        })
    }

    /// Returns a copy with every index shifted by `offset`.
    ///
    /// # Errors
    /// `CapacityOverflow` if a shifted index does not fit in `usize`.
    pub fn offset_by(&self, offset: usize) -> Result<Self> {
        let overflow = ChangeSetError::CapacityOverflow {
            operation: "change index offset",
        };
        let index = self.index.checked_add(offset).ok_or(overflow.clone())?;
        let to_index = match self.to_index {
            Some(to) => Some(to.checked_add(offset).ok_or(overflow)?),
            None => None,
        };

        Ok(Self {
            change_type: self.change_type,
            index,
            to_index,
            count: self.count,
            render_infos: self.render_infos.clone(),
        })
    }

    pub fn change_type(&self) -> ChangeType {
        self.change_type
    }

    /// Position in the sequence before this change; the source position for a move.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Destination position of a move, `None` for every other change type.
    pub fn to_index(&self) -> Option<usize> {
        self.to_index
    }

    /// Number of contiguous items this change spans.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if this change spans more than one item.
    pub fn is_range(&self) -> bool {
        self.count > 1
    }

    /// Item descriptors for inserts and updates; empty for removes and moves.
    pub fn render_infos(&self) -> &[RenderInfo] {
        &self.render_infos
    }

    /// First item descriptor, if any.
    pub fn render_info(&self) -> Option<&RenderInfo> {
        self.render_infos.first()
    }
}
