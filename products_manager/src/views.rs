//! Projections of the catalog shown to the two roles.

use crate::events::SortKey;
use crate::models::product::Product;

/// Identifies a view the presentation layer can redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    User,
    Executive,
}

/// A row of the user view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub name: String,
    pub sold_count: u32,
}

/// A row of the executive view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutiveRow {
    pub name: String,
    pub original_count: u32,
    pub sold_count: u32,
    pub in_store_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutiveView {
    pub rows: Vec<ExecutiveRow>,
    pub total_original: u64,
    pub total_sold: u64,
    pub total_in_store: u64,
}

/// Projects the user view, in insertion order unless a sort key is given.
pub fn user_view(products: &[Product], sort: Option<SortKey>) -> Vec<UserRow> {
    let mut rows = products
        .iter()
        .map(|p| UserRow {
            name: p.name().to_owned(),
            sold_count: p.sold_count(),
        })
        .collect::<Vec<_>>();

    if let Some(SortKey::Name) = sort {
        // Stable, ties keep insertion order
        rows.sort_by(|a, b| a.name.cmp(&b.name));
    }

    rows
}

/// Projects the executive view with totals over every product.
pub fn executive_view(products: &[Product]) -> ExecutiveView {
    let mut view = ExecutiveView::default();

    for product in products {
        view.total_original += u64::from(product.original_count());
        view.total_sold += u64::from(product.sold_count());
        view.total_in_store += u64::from(product.in_store_count());

        view.rows.push(ExecutiveRow {
            name: product.name().to_owned(),
            original_count: product.original_count(),
            sold_count: product.sold_count(),
            in_store_count: product.in_store_count(),
        });
    }

    view
}
