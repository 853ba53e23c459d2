//! Full picker flow against the fixture catalog: debounced search,
//! pagination, and confirmation into the shelf.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shared::{CatalogProduct, CatalogQuery, CatalogVariant};
use shelf_core::{
    CatalogPage, CatalogSource, FetchApplied, PickerSession, ShelfManager, SourceError,
};
use shelf_client::{FixtureCatalog, PickerDriver, ShelfClient};

/// Wraps a source and counts every fetch that reaches it
struct CountingSource<S> {
    inner: S,
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CountingSource<S> {
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CatalogPage, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_page(query).await
    }
}

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
                price: 19.9,
                inventory_quantity: 4,
            })
            .collect(),
    }
}

fn create_test_catalog() -> Vec<CatalogProduct> {
    vec![
        create_test_product(1, "Blue Shirt", &[11, 12]),
        create_test_product(2, "Red Mug", &[21]),
        create_test_product(3, "Linen Shirt", &[31]),
        create_test_product(4, "Wool Hat", &[41, 42]),
    ]
}

fn create_counting_driver(
    limit: u32,
) -> (PickerDriver<CountingSource<FixtureCatalog>>, Arc<AtomicUsize>) {
    let fetches = Arc::new(AtomicUsize::new(0));
    let source = CountingSource {
        inner: ShelfClient::fixture(create_test_catalog()),
        fetches: fetches.clone(),
    };
    let session = PickerSession::open(0, HashSet::new(), None).with_limit(limit);
    (PickerDriver::new(session, source), fetches)
}

#[tokio::test(start_paused = true)]
async fn test_debounced_typing_runs_exactly_one_fetch() {
    let (mut driver, fetches) = create_counting_driver(10);

    assert_eq!(driver.prime().await, FetchApplied::Applied);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert_eq!(driver.session().products().len(), 4);

    // Rapid retyping within the 300ms window
    driver.type_search("s");
    tokio::time::advance(Duration::from_millis(100)).await;
    driver.type_search("sh");
    tokio::time::advance(Duration::from_millis(100)).await;
    driver.type_search("shirt");

    let applied = driver.settle_search().await;
    assert_eq!(applied, Some(FetchApplied::Applied));
    assert_eq!(fetches.load(Ordering::SeqCst), 2, "only the final text fetched");
    assert_eq!(driver.session().committed_search(), "shirt");
    assert_eq!(driver.session().page(), 1);

    let titles: Vec<&str> = driver
        .session()
        .products()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Blue Shirt", "Linen Shirt"]);
}

#[tokio::test(start_paused = true)]
async fn test_retyping_the_same_text_fetches_nothing() {
    let (mut driver, fetches) = create_counting_driver(10);
    driver.prime().await;

    driver.type_search("shirt");
    driver.settle_search().await;
    let after_search = fetches.load(Ordering::SeqCst);

    // Clearing and retyping the same committed text
    driver.type_search("shirt");
    assert_eq!(driver.settle_search().await, None);
    assert_eq!(fetches.load(Ordering::SeqCst), after_search);
}

#[tokio::test(start_paused = true)]
async fn test_pagination_to_the_end() {
    let (mut driver, _) = create_counting_driver(2);
    driver.prime().await;
    assert_eq!(driver.session().products().len(), 2);
    assert!(driver.session().has_more());

    assert_eq!(driver.load_more().await, Some(FetchApplied::Applied));
    assert_eq!(driver.session().products().len(), 4);
    assert_eq!(driver.session().page(), 2);

    assert_eq!(driver.load_more().await, Some(FetchApplied::EndOfResults));
    assert!(!driver.session().has_more());
    assert_eq!(driver.session().products().len(), 4, "append end keeps window");

    assert_eq!(driver.load_more().await, None, "refused after end of results");
}

#[tokio::test]
async fn test_manager_pick_flow_against_fixture() {
    let source = ShelfClient::fixture(create_test_catalog());
    let mut manager = ShelfManager::new();

    let ticket = manager.open_picker(0).unwrap();
    let result = source.fetch_page(&ticket.query).await;
    let session = manager.session_mut().unwrap();
    assert_eq!(session.apply_fetch(ticket, result), FetchApplied::Applied);

    session.toggle_product(2).unwrap();
    session.toggle_variant(1, 12).unwrap();

    let summary = manager.confirm_picker().unwrap();
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(manager.shelf().product_ids(), vec![2, 1]);

    // The shirt slot kept only the toggled variant
    let shelf_core::SlotContent::Filled { variants, .. } =
        &manager.shelf().slot(1).unwrap().content
    else {
        panic!("slot 1 should be filled");
    };
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].id, 12);
}
