use crate::events::ProductEvent;
use crate::presenter::{self, Panel, SharedPresenter, Status};
use crate::store::SharedStore;
use notifier::Listener;

/// Writes added and sold products to storage and reports the outcome.
///
/// Must be the first listener of its kinds, the status it sets is the only
/// feedback the user gets about the write.
#[derive(Clone)]
pub struct StorageListener {
    store: SharedStore,
    presenter: SharedPresenter,
}

impl StorageListener {
    pub fn new(store: SharedStore, presenter: SharedPresenter) -> StorageListener {
        StorageListener { store, presenter }
    }
}

impl Listener<ProductEvent> for StorageListener {
    fn update(&mut self, event: &ProductEvent) {
        let status = match event {
            ProductEvent::Added(product) => match self.store.lock().insert(product) {
                Ok(()) => Status::new(Panel::Add, presenter::ADDED, true),
                Err(e) => {
                    log::error!("Could not insert {}: {}", product.name(), e);
                    Status::new(Panel::Add, presenter::NOT_ADDED, false)
                }
            },
            ProductEvent::Sold(product) => match self.store.lock().update_sold_count(product) {
                Ok(()) => Status::new(Panel::Sell, presenter::BOUGHT, true),
                Err(e) => {
                    log::error!("Could not update {}: {}", product.name(), e);
                    Status::new(Panel::Sell, presenter::NOT_BOUGHT, false)
                }
            },
            ProductEvent::Sorted(_) => return,
        };

        self.presenter.lock().notify_status(status);
    }
}
