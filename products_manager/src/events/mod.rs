use crate::models::product::Product;
use notifier::Event;

/// Keys the user view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
}

impl SortKey {
    /// Parses a sort key as typed by the user.
    pub fn parse(key: &str) -> Option<SortKey> {
        match key.trim().to_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductEventKind {
    Added,
    Sold,
    Sorted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductEvent {
    /// A product was received.
    Added(Product),
    /// A product was sold, the payload carries the new sold count.
    Sold(Product),
    /// The user view should be sorted. A missing key sorts nothing.
    Sorted(Option<SortKey>),
}

impl Event for ProductEvent {
    type Kind = ProductEventKind;

    fn kind(&self) -> ProductEventKind {
        match self {
            ProductEvent::Added(_) => ProductEventKind::Added,
            ProductEvent::Sold(_) => ProductEventKind::Sold,
            ProductEvent::Sorted(_) => ProductEventKind::Sorted,
        }
    }
}
