mod add_product;
mod sell_product;
mod sort_products;

pub use add_product::*;
pub use sell_product::*;
pub use sort_products::*;

use thiserror::Error;

/// The width of the stored name column.
pub const MAX_NAME_LEN: usize = 30;

/// Why a user action was refused.
#[derive(Error, Debug, PartialEq)]
pub enum ActionError {
    #[error("product name must not be empty")]
    EmptyName,

    #[error("product name `{0}` is longer than {max} characters", max = MAX_NAME_LEN)]
    NameTooLong(String),

    #[error("`{0}` is not a valid quantity")]
    InvalidQuantity(String),

    #[error("no product named `{0}`")]
    UnknownProduct(String),

    #[error("a product named `{0}` already exists")]
    DuplicateProduct(String),

    #[error(transparent)]
    Notifier(#[from] notifier::Error),
}

/// Parses a quantity typed by the user.
pub fn parse_quantity(input: &str) -> Result<u32, ActionError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ActionError::InvalidQuantity(input.trim().to_owned()))
}
