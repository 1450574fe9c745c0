#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_table_is_rejected() {
    assert_eq!(LayoutTable::new(Vec::new()), Err(ConfigError::EmptyLayout));
    assert_eq!(LayoutTable::from_heights(&[]), Err(ConfigError::EmptyLayout));
}

#[test]
fn non_positive_height_is_rejected() {
    assert_eq!(
        LayoutTable::from_heights(&[500.0, 0.0]),
        Err(ConfigError::InvalidSlot { index: 1 })
    );
    assert_eq!(
        LayoutTable::from_heights(&[f64::NAN]),
        Err(ConfigError::InvalidSlot { index: 0 })
    );
}

#[test]
fn slot_cycles_by_index() {
    let table = LayoutTable::overlay();
    assert_eq!(table.len(), 8);
    assert_eq!(table.slot(0).height_px, 500.0);
    assert_eq!(table.slot(7).height_px, 490.0);
    assert_eq!(table.slot(8), table.slot(0));
    assert_eq!(table.slot(13), table.slot(5));
}

#[test]
fn lookup_is_total_for_every_table_and_large_indexes() {
    for table in [LayoutTable::exploration(), LayoutTable::overlay(), LayoutTable::masonry()] {
        for index in (0..200).chain([usize::MAX - 1, usize::MAX]) {
            let slot = table.slot(index);
            assert_eq!(slot, table.slots()[index % table.len()]);
        }
    }
}

#[test]
fn masonry_table_matches_home_grid() {
    let heights = LayoutTable::masonry()
        .slots()
        .iter()
        .map(|s| s.height_px)
        .collect::<Vec<_>>();
    assert_eq!(heights, MASONRY_HEIGHTS.to_vec());
}

#[test]
fn exploration_slots_stay_on_canvas() {
    let table = LayoutTable::exploration();
    assert_eq!(table.len(), 12);
    assert!(!table.is_empty());
    for slot in table.slots() {
        assert!((0.0..100.0).contains(&slot.top_percent));
        assert!((0.0..100.0).contains(&slot.left_percent));
        assert!(OVERLAY_HEIGHTS.iter().chain(&[540.0, 470.0, 560.0]).any(|h| *h == slot.height_px));
    }
}

#[test]
fn place_pairs_items_with_cycled_slots() {
    let table = LayoutTable::from_heights(&[1.0, 2.0]).expect("table");
    let items = ["a", "b", "c"];
    let placed = table
        .place(&items)
        .map(|(i, item, slot)| (i, *item, slot.height_px))
        .collect::<Vec<_>>();
    assert_eq!(placed, vec![(0, "a", 1.0), (1, "b", 2.0), (2, "c", 1.0)]);
}
