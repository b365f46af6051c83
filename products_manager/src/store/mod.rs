use crate::models::product::Product;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

pub mod sqlite_store;

#[cfg(test)]
pub mod memory_store;

pub use sqlite_store::SqliteStore;

pub type SharedStore = Arc<Mutex<dyn ProductStore + Send>>;

/// Storage error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// No stored product has this name
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store was closed
    #[error("Store is closed")]
    Closed,

    /// The backend refused the write
    #[error("Write rejected: {0}")]
    Rejected(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persists product rows. Every write is committed before it returns.
pub trait ProductStore {
    /// Loads every stored product in insertion order.
    fn load_all(&mut self) -> StoreResult<Vec<Product>>;

    /// Inserts a new product row.
    fn insert(&mut self, product: &Product) -> StoreResult<()>;

    /// Writes the sold count of the row named exactly like `product`.
    fn update_sold_count(&mut self, product: &Product) -> StoreResult<()>;

    /// Releases the backend, later calls fail with [StoreError::Closed].
    fn close(&mut self) -> StoreResult<()> {
        Ok(())
    }
}
