//! Shelf widget demo against the fixture catalog
//!
//! Assembles a shelf the way the UI would: open the picker, search, toggle
//! products, confirm, then reorder and discount the resulting slots.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p shelf-client --example shelf_demo
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use shared::{CatalogProduct, CatalogVariant, DiscountKind};
use shelf_core::{
    CatalogSource, DragEnd, DragHandle, ShelfManager, SlotContent, SEARCH_DEBOUNCE,
};
use shelf_client::ShelfClient;

fn demo_catalog() -> Vec<CatalogProduct> {
    let variant = |id, title: &str, price| CatalogVariant {
        id,
        title: title.to_string(),
        price,
        inventory_quantity: 10,
    };
    vec![
        CatalogProduct {
            id: 1,
            title: "Blue Shirt".to_string(),
            image: None,
            variants: vec![variant(11, "S", 29.9), variant(12, "M", 29.9)],
        },
        CatalogProduct {
            id: 2,
            title: "Red Mug".to_string(),
            image: None,
            variants: vec![variant(21, "330ml", 8.5)],
        },
        CatalogProduct {
            id: 3,
            title: "Linen Shirt".to_string(),
            image: None,
            variants: vec![variant(31, "One size", 49.0)],
        },
    ]
}

fn print_shelf(manager: &ShelfManager) {
    for (index, slot) in manager.shelf().slots().iter().enumerate() {
        match &slot.content {
            SlotContent::Empty => println!("  {index}. (empty slot {})", slot.id),
            SlotContent::Filled {
                product,
                variants,
                discount,
            } => {
                let discount = discount
                    .map(|d| format!(" [{} {}]", d.value, d.kind))
                    .unwrap_or_default();
                let variants: Vec<&str> = variants.iter().map(|v| v.title.as_str()).collect();
                println!(
                    "  {index}. {} ({}){discount}",
                    product.title,
                    variants.join(", ")
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let source = ShelfClient::fixture(demo_catalog());
    let mut manager = ShelfManager::new();

    // Open the picker on the seeded empty slot; the initial fetch is issued
    // immediately, no debounce.
    let ticket = manager.open_picker(0)?;
    let result = source.fetch_page(&ticket.query).await;
    let session = manager.session_mut().context("picker should be open")?;
    session.apply_fetch(ticket, result);

    // Type a search and let the debounce fire
    let t0 = Instant::now();
    session.set_search_input("shirt", t0);
    if let Some(ticket) = session.fire_due_search(t0 + SEARCH_DEBOUNCE) {
        let result = source.fetch_page(&ticket.query).await;
        let applied = session.apply_fetch(ticket, result);
        println!("search fetch: {applied:?}");
    }

    session.toggle_product(1)?;
    session.toggle_variant(1, 11)?; // drop size S
    session.toggle_product(3)?;
    println!("{} products selected", session.selected_product_count());

    let summary = manager.confirm_picker()?;
    println!(
        "confirmed: {} inserted, {} skipped",
        summary.inserted, summary.skipped
    );
    print_shelf(&manager);

    // Drag the first slot below the second
    let from = manager.shelf().slot(0).context("slot 0")?.id;
    let to = manager.shelf().slot(1).context("slot 1")?.id;
    let outcome = manager.apply_drag(&DragEnd {
        active: DragHandle::Slot { id: from },
        over: Some(DragHandle::Slot { id: to }),
    });
    println!("drag: {outcome:?}");

    manager.set_discount_value(0, 15.0)?;
    manager.set_discount_kind(0, DiscountKind::PercentOff)?;
    print_shelf(&manager);

    Ok(())
}
