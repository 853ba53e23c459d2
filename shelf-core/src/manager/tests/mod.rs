use super::*;
use shared::{CatalogProduct, CatalogVariant};

mod test_flows;

fn create_test_product(id: i64, title: &str, variant_ids: &[i64]) -> CatalogProduct {
    CatalogProduct {
        id,
        title: title.to_string(),
        image: None,
        variants: variant_ids
            .iter()
            .map(|&vid| CatalogVariant {
                id: vid,
                title: format!("Variant {vid}"),
                price: 12.5,
                inventory_quantity: 6,
            })
            .collect(),
    }
}

fn create_test_catalog() -> Vec<CatalogProduct> {
    vec![
        create_test_product(1, "Blue Shirt", &[11, 12]),
        create_test_product(2, "Red Mug", &[21]),
        create_test_product(3, "Wool Hat", &[31, 32, 33]),
    ]
}

/// Open the picker on `slot_index` and load the catalog into the session
fn open_and_load(manager: &mut ShelfManager, slot_index: usize, catalog: &[CatalogProduct]) {
    let ticket = manager.open_picker(slot_index).unwrap();
    manager
        .session_mut()
        .unwrap()
        .apply_fetch(ticket, Ok(Some(catalog.to_vec())));
}

/// Manager with products 1 and 2 already picked into the shelf
fn create_filled_manager() -> ShelfManager {
    let mut manager = ShelfManager::new();
    let catalog = create_test_catalog();
    open_and_load(&mut manager, 0, &catalog);
    {
        let session = manager.session_mut().unwrap();
        session.toggle_product(1).unwrap();
        session.toggle_product(2).unwrap();
    }
    manager.confirm_picker().unwrap();
    manager
}
