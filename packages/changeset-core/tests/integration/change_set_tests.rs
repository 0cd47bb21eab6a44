//! Counting behavior of change sets.

use ntest::timeout;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use changeset_core::{Change, ChangeSet, ChangeType, RenderInfo};

use super::helpers::render_infos;

/// Random unit inserts and removes keep `count = initial + inserts - removes`
#[timeout(5000)]
#[test]
fn test_unit_insert_remove_counts() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let initial = rng.gen_range(0..20);
        let mut change_set = ChangeSet::acquire(Some(initial));
        let mut inserts = 0;
        let mut removes = 0;

        for _ in 0..200 {
            let len = change_set.count();
            if len == 0 || rng.gen_bool(0.5) {
                let index = rng.gen_range(0..=len);
                change_set
                    .add_change(Change::insert(index, RenderInfo::empty()))
                    .unwrap();
                inserts += 1;
            } else {
                let index = rng.gen_range(0..len);
                change_set.add_change(Change::remove(index)).unwrap();
                removes += 1;
            }
        }

        assert_eq!(change_set.count(), initial + inserts - removes);
        assert_eq!(change_set.change_count(), inserts + removes);
        change_set.release();
    }
}

/// Updates and moves never change the count
#[timeout(5000)]
#[test]
fn test_update_and_move_keep_count() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut change_set = ChangeSet::acquire(Some(30));

    for _ in 0..100 {
        let from = rng.gen_range(0..30);
        let to = rng.gen_range(0..30);
        if rng.gen_bool(0.5) {
            change_set.move_item(from, to);
        } else {
            let span = rng.gen_range(1..=30 - from);
            change_set
                .add_change(Change::update_range(from, span, render_infos(span)).unwrap())
                .unwrap();
        }
        assert_eq!(change_set.count(), 30);
    }

    assert_eq!(change_set.change_count(), 100);
}

/// One range record moves the count by its whole span
#[timeout(1000)]
#[test]
fn test_range_is_one_record() {
    let mut change_set = ChangeSet::acquire(None);

    change_set
        .add_change(Change::insert_range(0, 25, render_infos(25)).unwrap())
        .unwrap();
    assert_eq!(change_set.count(), 25);
    assert_eq!(change_set.change_count(), 1);

    change_set
        .add_change(Change::remove_range(5, 20).unwrap())
        .unwrap();
    assert_eq!(change_set.count(), 5);
    assert_eq!(change_set.change_count(), 2);
}

/// Payload descriptors survive in the log unchanged
#[timeout(1000)]
#[test]
fn test_payload_is_preserved() {
    let rows: Vec<RenderInfo> = (0..3).map(|i| RenderInfo::new(format!("row {i}"))).collect();
    let mut change_set = ChangeSet::acquire(None);
    change_set
        .add_change(Change::insert_range(0, 3, rows.clone()).unwrap())
        .unwrap();

    let change = change_set.change_at(0).unwrap();
    assert_eq!(change.change_type(), ChangeType::Insert);
    assert_eq!(change.render_infos(), rows.as_slice());
    assert_eq!(
        change.render_infos()[2].downcast_ref::<String>().map(String::as_str),
        Some("row 2")
    );
}

/// Indices are trusted, only the count is guarded
#[timeout(1000)]
#[test]
fn test_indices_are_not_validated() {
    let mut change_set = ChangeSet::acquire(Some(2));

    change_set
        .add_change(Change::update(100, RenderInfo::empty()))
        .unwrap();
    change_set.move_item(50, 70);
    change_set.add_change(Change::remove(99)).unwrap();

    assert_eq!(change_set.count(), 1);
    assert_eq!(change_set.change_count(), 3);
}
