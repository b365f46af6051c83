/// One product's inventory counts.
///
/// The name is the product's identity and is compared case-insensitively.
/// No invariant is checked here, the sell command guards `sold_count <= original_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    original_count: u32,
    sold_count: u32,
}

impl Product {
    pub fn new<S: Into<String>>(name: S, original_count: u32) -> Product {
        Product::with_counts(name, original_count, 0)
    }

    pub fn with_counts<S: Into<String>>(name: S, original_count: u32, sold_count: u32) -> Product {
        Product {
            name: name.into(),
            original_count,
            sold_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Units received.
    pub fn original_count(&self) -> u32 {
        self.original_count
    }

    pub fn set_original_count(&mut self, original_count: u32) {
        self.original_count = original_count;
    }

    /// Units sold so far.
    pub fn sold_count(&self) -> u32 {
        self.sold_count
    }

    pub fn set_sold_count(&mut self, sold_count: u32) {
        self.sold_count = sold_count;
    }

    /// Units still in store, never stored.
    pub fn in_store_count(&self) -> u32 {
        self.original_count.saturating_sub(self.sold_count)
    }

    /// Whether `name`, trimmed, names this product regardless of case.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}
