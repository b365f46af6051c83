use super::{parse_quantity, ActionError};
use crate::catalog::SharedCatalog;
use crate::events::ProductEvent;
use crate::models::product::Product;
use notifier::{DefaultNotifier, Notifier, Request, RequestHandler};

#[derive(Debug, Clone)]
pub struct SellProductCommand {
    pub name: String,
    pub quantity: String,
}

/// The outcome of a sell command that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sale {
    /// The sale was published, carries the product with its new sold count.
    Recorded(Product),
    /// Not enough units in store, nothing was published.
    Rejected { requested: u32, in_store: u32 },
}

impl Request<Result<Sale, ActionError>> for SellProductCommand {}

pub struct SellProductRequestHandler(pub SharedCatalog, pub DefaultNotifier<ProductEvent>);
impl RequestHandler<SellProductCommand, Result<Sale, ActionError>> for SellProductRequestHandler {
    fn handle(&mut self, command: SellProductCommand) -> Result<Sale, ActionError> {
        let requested = parse_quantity(&command.quantity)?;

        // The catalog lock must be released before publishing, listeners take it.
        let mut product = self
            .0
            .lock()
            .find(&command.name)
            .cloned()
            .ok_or_else(|| ActionError::UnknownProduct(command.name.trim().to_owned()))?;

        let sold_count = match product.sold_count().checked_add(requested) {
            Some(sold) if sold <= product.original_count() => sold,
            _ => {
                log::debug!(
                    "Rejected sale of {} {}, {} in store",
                    requested,
                    product.name(),
                    product.in_store_count()
                );
                return Ok(Sale::Rejected {
                    requested,
                    in_store: product.in_store_count(),
                });
            }
        };

        product.set_sold_count(sold_count);
        self.1.publish(ProductEvent::Sold(product.clone()))?;

        Ok(Sale::Recorded(product))
    }
}
