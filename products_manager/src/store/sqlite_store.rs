//! SQLite product storage
//!
//! One connection, one table. Each write runs in its own transaction.

use super::{ProductStore, StoreError, StoreResult};
use crate::models::product::Product;
use log::{debug, info};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

pub const MEMORY_PATH: &str = ":memory:";

const CREATE_PRODUCT_TABLE: &str = "CREATE TABLE IF NOT EXISTS product (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(30) NOT NULL,
    original INTEGER NOT NULL,
    sold INTEGER NOT NULL
);";

pub struct SqliteStore {
    conn: Option<Connection>,
    path: PathBuf,
}

impl SqliteStore {
    /// Opens the database at `path`, creating the file and the product table when absent.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        info!("Opening product database at {}", path.display());

        let conn = if path.to_str() == Some(MEMORY_PATH) {
            Connection::open_in_memory()?
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Rejected(format!("Failed to create directory: {}", e))
                })?;
            }
            Connection::open(&path)?
        };

        initialize(&conn)?;

        Ok(SqliteStore {
            conn: Some(conn),
            path,
        })
    }

    /// Opens an in-memory database.
    pub fn memory() -> StoreResult<Self> {
        Self::open(MEMORY_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connection(&mut self) -> StoreResult<&mut Connection> {
        self.conn.as_mut().ok_or(StoreError::Closed)
    }
}

fn initialize(conn: &Connection) -> StoreResult<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'product')",
        [],
        |row| row.get(0),
    )?;

    if exists {
        info!("Product table exists");
    } else {
        info!("Product table does not exist, creating it");
        conn.execute_batch(CREATE_PRODUCT_TABLE)?;
    }

    Ok(())
}

impl ProductStore for SqliteStore {
    fn load_all(&mut self) -> StoreResult<Vec<Product>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare("SELECT name, original, sold FROM product ORDER BY id")?;
        let products = stmt
            .query_map([], |row| {
                Ok(Product::with_counts(
                    row.get::<_, String>("name")?,
                    row.get("original")?,
                    row.get("sold")?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        info!("Products loaded: {}", products.len());
        Ok(products)
    }

    fn insert(&mut self, product: &Product) -> StoreResult<()> {
        let tx = self.connection()?.transaction()?;
        tx.execute(
            "INSERT INTO product (name, original, sold) VALUES (?1, ?2, ?3)",
            params![product.name(), product.original_count(), product.sold_count()],
        )?;
        tx.commit()?;

        debug!("Inserted {:?}", product);
        Ok(())
    }

    fn update_sold_count(&mut self, product: &Product) -> StoreResult<()> {
        let tx = self.connection()?.transaction()?;
        let updated = tx.execute(
            "UPDATE product SET sold = ?1 WHERE name = ?2",
            params![product.sold_count(), product.name()],
        )?;

        if updated == 0 {
            // Dropping the transaction rolls it back
            return Err(StoreError::NotFound(product.name().to_owned()));
        }

        tx.commit()?;

        debug!("Updated {} to {} sold", product.name(), product.sold_count());
        Ok(())
    }

    fn close(&mut self) -> StoreResult<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| e)?;
            info!("Product database closed normally");
        }

        Ok(())
    }
}
