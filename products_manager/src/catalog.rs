use crate::events::SortKey;
use crate::models::product::Product;
use crate::views::{self, ExecutiveView, UserRow};
use parking_lot::Mutex;
use std::sync::Arc;

pub type SharedCatalog = Arc<Mutex<Catalog>>;

/// The single authoritative product collection.
///
/// Both views are projected from it on demand, the catalog only remembers
/// how the user asked the user view to be sorted.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    user_sort: Option<SortKey>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Catalog {
        Catalog {
            products,
            user_sort: None,
        }
    }

    pub fn shared(products: Vec<Product>) -> SharedCatalog {
        Arc::new(Mutex::new(Catalog::new(products)))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds the first product matching `name`, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches_name(name))
    }

    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Copies `sold_count` onto the first product matching `name`.
    /// Returns `false` when no product matches.
    pub fn record_sale(&mut self, name: &str, sold_count: u32) -> bool {
        match self.products.iter_mut().find(|p| p.matches_name(name)) {
            Some(product) => {
                product.set_sold_count(sold_count);
                true
            }
            None => false,
        }
    }

    pub fn sort_user_view(&mut self, key: SortKey) {
        self.user_sort = Some(key);
    }

    pub fn user_sort(&self) -> Option<SortKey> {
        self.user_sort
    }

    pub fn user_view(&self) -> Vec<UserRow> {
        views::user_view(&self.products, self.user_sort)
    }

    pub fn executive_view(&self) -> ExecutiveView {
        views::executive_view(&self.products)
    }
}
