use crate::catalog::SharedCatalog;
use crate::events::{ProductEvent, SortKey};
use notifier::Listener;

/// Applies every event to the catalog both views are projected from.
#[derive(Clone)]
pub struct CatalogListener(pub SharedCatalog);

impl Listener<ProductEvent> for CatalogListener {
    fn update(&mut self, event: &ProductEvent) {
        let mut catalog = self.0.lock();

        match event {
            ProductEvent::Added(product) => catalog.add(product.clone()),
            ProductEvent::Sold(product) => {
                if !catalog.record_sale(product.name(), product.sold_count()) {
                    log::debug!("Sold product {} is not in the catalog", product.name());
                }
            }
            ProductEvent::Sorted(Some(SortKey::Name)) => catalog.sort_user_view(SortKey::Name),
            ProductEvent::Sorted(None) => {}
        }
    }
}
