use crate::catalog::{Catalog, SharedCatalog};
use crate::commands::*;
use crate::events::{ProductEvent, ProductEventKind};
use crate::listeners::{CatalogListener, StorageListener, ViewListener};
use crate::presenter::SharedPresenter;
use crate::queries::*;
use crate::store::{SharedStore, StoreResult};
use crate::views::ViewId;
use notifier::DefaultNotifier;

/// Loads every stored product into a fresh catalog.
pub fn load_catalog(store: &SharedStore) -> StoreResult<SharedCatalog> {
    let products = store.lock().load_all()?;
    Ok(Catalog::shared(products))
}

/// Wires commands, queries and listeners around one notifier.
///
/// The storage listener is subscribed first to `Added` and `Sold`, so the
/// status it reports is set before the catalog or any view changes.
pub fn create_notifier(
    store: SharedStore,
    catalog: SharedCatalog,
    presenter: SharedPresenter,
) -> DefaultNotifier<ProductEvent> {
    use ProductEventKind::*;

    let storage = StorageListener::new(store, presenter.clone());
    let catalog_sync = CatalogListener(catalog.clone());
    let user_view = ViewListener::new(ViewId::User, presenter.clone());
    let executive_view = ViewListener::new(ViewId::Executive, presenter);

    DefaultNotifier::builder()
        // Commands
        .add_handler_deferred(|n| AddProductRequestHandler(catalog.clone(), n))
        .add_handler_deferred(|n| SellProductRequestHandler(catalog.clone(), n))
        .add_handler_deferred(SortProductsRequestHandler)
        // Queries
        .add_handler(GetUserViewRequestHandler(catalog.clone()))
        .add_handler(GetExecutiveViewRequestHandler(catalog))
        // Listeners
        .subscribe(Added, storage.clone())
        .subscribe(Added, catalog_sync.clone())
        .subscribe(Added, user_view.clone())
        .subscribe(Added, executive_view.clone())
        .subscribe(Sold, storage)
        .subscribe(Sold, catalog_sync.clone())
        .subscribe(Sold, user_view.clone())
        .subscribe(Sold, executive_view)
        .subscribe(Sorted, catalog_sync)
        .subscribe(Sorted, user_view)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SortKey;
    use crate::models::product::Product;
    use crate::presenter::{self, Panel, Status};
    use crate::store::memory_store::MemoryStore;
    use crate::testing::RecordingPresenter;
    use crate::views::{ExecutiveView, UserRow};
    use notifier::Notifier;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Harness {
        notifier: DefaultNotifier<ProductEvent>,
        store: Arc<Mutex<MemoryStore>>,
        catalog: SharedCatalog,
        presenter: Arc<Mutex<RecordingPresenter>>,
    }

    impl Harness {
        fn new() -> Harness {
            Harness::with_store(MemoryStore::default())
        }

        fn with_store(store: MemoryStore) -> Harness {
            let store = Arc::new(Mutex::new(store));
            let shared_store: SharedStore = store.clone();
            let catalog = load_catalog(&shared_store).unwrap();

            let presenter = Arc::new(Mutex::new(RecordingPresenter {
                catalog: Some(catalog.clone()),
                ..RecordingPresenter::default()
            }));

            let notifier = create_notifier(shared_store, catalog.clone(), presenter.clone());

            Harness {
                notifier,
                store,
                catalog,
                presenter,
            }
        }

        fn add(&mut self, name: &str, quantity: &str) -> Result<Product, ActionError> {
            self.notifier
                .send(AddProductCommand {
                    name: name.to_owned(),
                    quantity: quantity.to_owned(),
                })
                .unwrap()
        }

        fn sell(&mut self, name: &str, quantity: &str) -> Result<Sale, ActionError> {
            self.notifier
                .send(SellProductCommand {
                    name: name.to_owned(),
                    quantity: quantity.to_owned(),
                })
                .unwrap()
        }

        fn sort(&mut self, by: Option<SortKey>) {
            self.notifier
                .send(SortProductsCommand { by })
                .unwrap()
                .unwrap();
        }

        fn user_view(&mut self) -> Vec<UserRow> {
            self.notifier.send(GetUserViewRequest).unwrap()
        }

        fn executive_view(&mut self) -> ExecutiveView {
            self.notifier.send(GetExecutiveViewRequest).unwrap()
        }

        fn user_names(&mut self) -> Vec<String> {
            self.user_view().into_iter().map(|r| r.name).collect()
        }

        fn callbacks(&self) -> (usize, usize) {
            let presenter = self.presenter.lock();
            (presenter.statuses.len(), presenter.redraws.len())
        }
    }

    #[test]
    fn add_product_reaches_storage_and_both_views() {
        let mut harness = Harness::new();

        let product = harness.add("Widget", "10").unwrap();
        assert_eq!(Product::new("Widget", 10), product);

        assert_eq!(
            vec![UserRow {
                name: "Widget".to_owned(),
                sold_count: 0
            }],
            harness.user_view()
        );

        let executive = harness.executive_view();
        assert_eq!(1, executive.rows.len());
        assert_eq!(10, executive.rows[0].original_count);
        assert_eq!(0, executive.rows[0].sold_count);
        assert_eq!(10, executive.rows[0].in_store_count);

        assert_eq!(vec![Product::new("Widget", 10)], harness.store.lock().inserts);

        let recorded = harness.presenter.lock();
        assert_eq!(
            vec![Status::new(Panel::Add, presenter::ADDED, true)],
            recorded.statuses
        );
        assert_eq!(vec![ViewId::User, ViewId::Executive], recorded.redraws);
    }

    #[test]
    fn sell_product_updates_both_views_and_storage() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();

        let sale = harness.sell("widget", "4").unwrap();
        assert_eq!(Sale::Recorded(Product::with_counts("Widget", 10, 4)), sale);

        assert_eq!(4, harness.user_view()[0].sold_count);
        let executive = harness.executive_view();
        assert_eq!(4, executive.rows[0].sold_count);
        assert_eq!(6, executive.rows[0].in_store_count);

        assert_eq!(
            vec![Product::with_counts("Widget", 10, 4)],
            harness.store.lock().updates
        );
        assert_eq!(
            Some(&Status::new(Panel::Sell, presenter::BOUGHT, true)),
            harness.presenter.lock().statuses.last()
        );
    }

    #[test]
    fn oversell_is_dropped_silently() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();
        harness.sell("Widget", "4").unwrap();
        let callbacks = harness.callbacks();

        let sale = harness.sell("Widget", "7").unwrap();
        assert_eq!(
            Sale::Rejected {
                requested: 7,
                in_store: 6
            },
            sale
        );

        assert_eq!(4, harness.catalog.lock().products()[0].sold_count());
        assert_eq!(1, harness.store.lock().updates.len());
        assert_eq!(callbacks, harness.callbacks());
    }

    #[test]
    fn oversell_by_overflow_is_dropped() {
        let mut harness = Harness::new();
        harness.add("Widget", &u32::MAX.to_string()).unwrap();
        harness.sell("Widget", "1").unwrap();

        let sale = harness.sell("Widget", &u32::MAX.to_string()).unwrap();
        assert!(matches!(sale, Sale::Rejected { .. }));
        assert_eq!(1, harness.store.lock().updates.len());
    }

    #[test]
    fn selling_everything_is_allowed() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();

        let sale = harness.sell("Widget", "10").unwrap();
        assert_eq!(Sale::Recorded(Product::with_counts("Widget", 10, 10)), sale);
        assert_eq!(0, harness.executive_view().total_in_store);
    }

    #[test]
    fn selling_nothing_still_records_a_sale() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();
        harness.sell("Widget", "4").unwrap();

        let sale = harness.sell("Widget", "0").unwrap();

        assert_eq!(Sale::Recorded(Product::with_counts("Widget", 10, 4)), sale);
        let store = harness.store.lock();
        assert_eq!(2, store.updates.len());
        assert_eq!(4, store.updates[1].sold_count());
        assert_eq!(4, store.rows[0].sold_count());
    }

    #[test]
    fn sale_touches_only_the_matching_product() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();
        harness.add("Apple", "5").unwrap();

        harness.sell("APPLE", "2").unwrap();

        let view = harness.user_view();
        assert_eq!(0, view[0].sold_count);
        assert_eq!(2, view[1].sold_count);
    }

    #[test]
    fn sort_orders_the_user_view_only() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();
        harness.add("Apple", "5").unwrap();

        harness.sort(Some(SortKey::Name));
        assert_eq!(vec!["Apple", "Widget"], harness.user_names());

        let executive = harness
            .executive_view()
            .rows
            .into_iter()
            .map(|r| r.name)
            .collect::<Vec<_>>();
        assert_eq!(vec!["Widget", "Apple"], executive);

        harness.sort(Some(SortKey::Name));
        assert_eq!(vec!["Apple", "Widget"], harness.user_names());
        assert_eq!(Some(&ViewId::User), harness.presenter.lock().redraws.last());
    }

    #[test]
    fn sort_keeps_applying_to_later_products() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();
        harness.sort(Some(SortKey::Name));
        harness.add("Apple", "5").unwrap();

        assert_eq!(vec!["Apple", "Widget"], harness.user_names());
    }

    #[test]
    fn sort_without_key_is_a_no_op() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();
        harness.add("Apple", "5").unwrap();
        let callbacks = harness.callbacks();

        harness.sort(None);

        assert_eq!(vec!["Widget", "Apple"], harness.user_names());
        assert_eq!(callbacks, harness.callbacks());
    }

    #[test]
    fn storage_status_is_reported_before_the_catalog_changes() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();
        harness.add("Apple", "5").unwrap();

        assert_eq!(vec![0, 1], harness.presenter.lock().catalog_len_at_status);
    }

    #[test]
    fn sale_status_is_reported_before_the_catalog_changes() {
        let mut harness = Harness::new();
        harness.add("Widget", "10").unwrap();
        harness.sell("Widget", "4").unwrap();
        harness.sell("widget", "3").unwrap();

        let recorded = harness.presenter.lock();
        assert_eq!(vec![0, 0, 4], recorded.catalog_sold_at_status);
        assert_eq!(
            Some(&Status::new(Panel::Sell, presenter::BOUGHT, true)),
            recorded.statuses.last()
        );
        drop(recorded);
        assert_eq!(7, harness.executive_view().total_sold);
    }

    #[test]
    fn storage_failure_is_reported_in_the_status() {
        let mut harness = Harness::with_store(MemoryStore::failing());

        harness.add("Widget", "10").unwrap();

        let recorded = harness.presenter.lock();
        assert_eq!(
            vec![Status::new(Panel::Add, presenter::NOT_ADDED, false)],
            recorded.statuses
        );
        // Views assume the write went through
        assert_eq!(1, harness.catalog.lock().len());
    }

    #[test]
    fn sell_failure_is_reported_in_the_status() {
        let mut store = MemoryStore::with_rows(vec![Product::new("Widget", 10)]);
        store.fail_writes = true;
        let mut harness = Harness::with_store(store);

        harness.sell("Widget", "1").unwrap();

        assert_eq!(
            Some(&Status::new(Panel::Sell, presenter::NOT_BOUGHT, false)),
            harness.presenter.lock().statuses.last()
        );
    }

    #[test]
    fn invalid_input_publishes_nothing() {
        let mut harness = Harness::new();

        assert_eq!(
            Err(ActionError::InvalidQuantity("ten".to_owned())),
            harness.add("Widget", "ten")
        );
        assert_eq!(Err(ActionError::EmptyName), harness.add("  ", "1"));
        assert!(matches!(
            harness.add(&"x".repeat(31), "1"),
            Err(ActionError::NameTooLong(_))
        ));

        harness.add("Widget", "10").unwrap();
        assert_eq!(
            Err(ActionError::DuplicateProduct("Widget".to_owned())),
            harness.add("WIDGET", "3")
        );
        assert_eq!(
            Err(ActionError::UnknownProduct("Pear".to_owned())),
            harness.sell(" Pear ", "1")
        );
        assert_eq!(
            Err(ActionError::InvalidQuantity("-1".to_owned())),
            harness.sell("Widget", "-1")
        );

        assert_eq!(1, harness.store.lock().inserts.len());
        assert!(harness.store.lock().updates.is_empty());
        assert_eq!(1, harness.catalog.lock().len());
    }

    #[test]
    fn catalog_starts_from_stored_products() {
        let store = MemoryStore::with_rows(vec![
            Product::with_counts("Widget", 10, 4),
            Product::new("Apple", 5),
        ]);
        let mut harness = Harness::with_store(store);

        assert_eq!(vec!["Widget", "Apple"], harness.user_names());
        assert_eq!(11, harness.executive_view().total_in_store);

        harness.sell("Widget", "6").unwrap();
        assert_eq!(10, harness.store.lock().rows[0].sold_count());
    }
}
