mod catalog_listener;
mod storage_listener;
mod view_listener;

pub use catalog_listener::CatalogListener;
pub use storage_listener::StorageListener;
pub use view_listener::ViewListener;
