//! Process-wide pool configuration.
//!
//! Runs as its own test binary so no other test touches the global pool
//! before it is configured.

use ntest::timeout;

use changeset_core::{Change, ChangeSet, ChangeSetPool, PoolConfig, RenderInfo};

#[timeout(1000)]
#[test]
fn test_init_global_once() {
    let installed = ChangeSetPool::init_global(PoolConfig {
        max_pooled: 8,
        enable_stats: true,
        ..Default::default()
    });
    assert!(installed);

    let installed_again = ChangeSetPool::init_global(PoolConfig::default());
    assert!(!installed_again);

    let config = ChangeSetPool::global().config();
    assert!(config.enable_stats);
    assert_eq!(config.max_pooled, 8);

    let mut change_set = ChangeSet::acquire(None);
    change_set
        .add_change(Change::insert(0, RenderInfo::empty()))
        .unwrap();
    assert_eq!(change_set.stats().map(|stats| stats.insert_single), Some(1));
    change_set.release();

    let recycled = ChangeSet::acquire(None);
    assert!(recycled.stats().is_some());
    assert_eq!(recycled.change_count(), 0);
}
