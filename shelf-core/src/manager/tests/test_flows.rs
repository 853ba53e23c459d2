//! End-to-end widget flows: pick, edit, drag, discount.

use super::*;
use crate::shelf::{DragHandle, DragOutcome};

#[test]
fn test_pick_flow_fills_the_shelf() {
    let manager = create_filled_manager();

    assert!(manager.session().is_none(), "confirm closes the picker");
    assert_eq!(manager.shelf().len(), 2);
    assert_eq!(manager.shelf().product_ids(), vec![1, 2]);
}

#[test]
fn test_confirm_reports_inserted_and_skipped() {
    let mut manager = ShelfManager::new();
    let catalog = create_test_catalog();
    open_and_load(&mut manager, 0, &catalog);
    {
        let session = manager.session_mut().unwrap();
        session.toggle_product(1).unwrap();
        session.toggle_product(2).unwrap();

        // A later search replaces the window and product 1 is gone from it
        let t0 = std::time::Instant::now();
        session.set_search_input("mug", t0);
        let flush = session.fire_due_search(t0 + crate::picker::SEARCH_DEBOUNCE).unwrap();
        session.apply_fetch(flush, Ok(Some(vec![create_test_product(2, "Red Mug", &[21])])));
    }

    let summary = manager.confirm_picker().unwrap();
    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(manager.shelf().product_ids(), vec![2]);
}

#[test]
fn test_reopening_a_filled_slot_seeds_the_selection() {
    let mut manager = create_filled_manager();
    manager.remove_variant(0, 12).unwrap();

    let catalog = create_test_catalog();
    open_and_load(&mut manager, 0, &catalog);

    let session = manager.session().unwrap();
    assert!(session.selection().contains_product(1));
    assert!(session.selection().contains_variant(1, 11));
    assert!(!session.selection().contains_variant(1, 12));
    assert_eq!(session.selected_product_count(), 1);

    manager.cancel_picker();
    assert_eq!(manager.shelf().product_ids(), vec![1, 2]);
}

#[test]
fn test_exclusion_hides_other_slots_products() {
    let mut manager = create_filled_manager();
    let catalog = create_test_catalog();
    open_and_load(&mut manager, 0, &catalog);

    let visible: Vec<i64> = manager
        .session()
        .unwrap()
        .visible_products()
        .iter()
        .map(|p| p.id)
        .collect();
    // Product 2 lives in the other slot; product 1 is the one being edited
    assert_eq!(visible, vec![1, 3]);
}

#[test]
fn test_picking_into_an_appended_empty_slot() {
    let mut manager = create_filled_manager();
    manager.add_slot();

    let catalog = create_test_catalog();
    open_and_load(&mut manager, 2, &catalog);
    manager.session_mut().unwrap().toggle_product(3).unwrap();

    let summary = manager.confirm_picker().unwrap();
    assert_eq!(summary.inserted, 1);
    assert_eq!(manager.shelf().product_ids(), vec![1, 2, 3]);
    assert_eq!(manager.shelf().len(), 3);
}

#[test]
fn test_slot_drag_through_manager() {
    let mut manager = create_filled_manager();
    let id0 = manager.shelf().slot(0).unwrap().id;
    let id1 = manager.shelf().slot(1).unwrap().id;

    let outcome = manager.apply_drag(&DragEnd {
        active: DragHandle::Slot { id: id0 },
        over: Some(DragHandle::Slot { id: id1 }),
    });

    assert_eq!(outcome, DragOutcome::Moved);
    assert_eq!(manager.shelf().product_ids(), vec![2, 1]);
}

#[test]
fn test_variant_drag_through_manager() {
    let mut manager = create_filled_manager();

    let outcome = manager.apply_drag(&DragEnd {
        active: DragHandle::Variant { owner: 0, id: 11 },
        over: Some(DragHandle::Variant { owner: 0, id: 12 }),
    });
    assert_eq!(outcome, DragOutcome::Moved);

    let outcome = manager.apply_drag(&DragEnd {
        active: DragHandle::Variant { owner: 0, id: 11 },
        over: Some(DragHandle::Variant { owner: 1, id: 21 }),
    });
    assert_eq!(outcome, DragOutcome::CrossSlot);
}

#[test]
fn test_discount_edit_flow() {
    let mut manager = create_filled_manager();

    manager.set_discount_value(0, 15.0).unwrap();
    manager
        .set_discount_kind(1, shared::DiscountKind::FlatOff)
        .unwrap();

    let SlotContent::Filled { discount, .. } = &manager.shelf().slot(0).unwrap().content else {
        panic!("slot 0 should be filled");
    };
    assert_eq!(discount.unwrap().value, 15.0);

    let SlotContent::Filled { discount, .. } = &manager.shelf().slot(1).unwrap().content else {
        panic!("slot 1 should be filled");
    };
    assert_eq!(discount.unwrap().kind, shared::DiscountKind::FlatOff);
    assert_eq!(discount.unwrap().value, 0.0);
}

#[test]
fn test_batch_pick_expands_target_slot() {
    let mut manager = ShelfManager::new();
    let catalog = create_test_catalog();
    open_and_load(&mut manager, 0, &catalog);
    {
        let session = manager.session_mut().unwrap();
        session.toggle_product(3).unwrap();
        session.toggle_product(1).unwrap();
        session.toggle_product(2).unwrap();
    }

    let summary = manager.confirm_picker().unwrap();
    assert_eq!(summary.inserted, 3);
    // First-seen toggle order drives slot order
    assert_eq!(manager.shelf().product_ids(), vec![3, 1, 2]);
}
