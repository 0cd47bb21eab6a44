//! Shared builders for integration tests.

use changeset_core::{Change, ChangeSet, RenderInfo};

/// Creates `count` distinct empty descriptors.
pub fn render_infos(count: usize) -> Vec<RenderInfo> {
    (0..count).map(|_| RenderInfo::empty()).collect()
}

/// Acquires a change set holding `count` unit inserts at indices `0..count`.
pub fn unit_inserts(count: usize) -> ChangeSet {
    let mut change_set = ChangeSet::acquire(None);
    for i in 0..count {
        change_set
            .add_change(Change::insert(i, RenderInfo::empty()))
            .unwrap();
    }
    change_set
}
