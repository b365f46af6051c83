use super::{parse_quantity, ActionError, MAX_NAME_LEN};
use crate::catalog::SharedCatalog;
use crate::events::ProductEvent;
use crate::models::product::Product;
use notifier::{DefaultNotifier, Notifier, Request, RequestHandler};

#[derive(Debug, Clone)]
pub struct AddProductCommand {
    pub name: String,
    pub quantity: String,
}

impl Request<Result<Product, ActionError>> for AddProductCommand {}

pub struct AddProductRequestHandler(pub SharedCatalog, pub DefaultNotifier<ProductEvent>);
impl RequestHandler<AddProductCommand, Result<Product, ActionError>> for AddProductRequestHandler {
    fn handle(&mut self, command: AddProductCommand) -> Result<Product, ActionError> {
        let name = command.name.trim();

        if name.is_empty() {
            return Err(ActionError::EmptyName);
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(ActionError::NameTooLong(name.to_owned()));
        }

        let quantity = parse_quantity(&command.quantity)?;

        if let Some(existing) = self.0.lock().find(name) {
            return Err(ActionError::DuplicateProduct(existing.name().to_owned()));
        }

        let product = Product::new(name, quantity);
        self.1.publish(ProductEvent::Added(product.clone()))?;

        Ok(product)
    }
}
