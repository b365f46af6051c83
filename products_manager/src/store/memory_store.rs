use super::{ProductStore, StoreError, StoreResult};
use crate::models::product::Product;

/// Keeps rows in memory and records every write it receives.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub rows: Vec<Product>,
    pub inserts: Vec<Product>,
    pub updates: Vec<Product>,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<Product>) -> MemoryStore {
        MemoryStore {
            rows,
            ..MemoryStore::default()
        }
    }

    pub fn failing() -> MemoryStore {
        MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        }
    }
}

impl ProductStore for MemoryStore {
    fn load_all(&mut self) -> StoreResult<Vec<Product>> {
        Ok(self.rows.clone())
    }

    fn insert(&mut self, product: &Product) -> StoreResult<()> {
        self.inserts.push(product.clone());
        if self.fail_writes {
            return Err(StoreError::Rejected(product.name().to_owned()));
        }

        self.rows.push(product.clone());
        Ok(())
    }

    fn update_sold_count(&mut self, product: &Product) -> StoreResult<()> {
        self.updates.push(product.clone());
        if self.fail_writes {
            return Err(StoreError::Rejected(product.name().to_owned()));
        }

        match self.rows.iter_mut().find(|p| p.name() == product.name()) {
            Some(row) => {
                row.set_sold_count(product.sold_count());
                Ok(())
            }
            None => Err(StoreError::NotFound(product.name().to_owned())),
        }
    }
}
