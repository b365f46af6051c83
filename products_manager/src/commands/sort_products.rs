use super::ActionError;
use crate::events::{ProductEvent, SortKey};
use notifier::{DefaultNotifier, Notifier, Request, RequestHandler};

#[derive(Debug, Clone)]
pub struct SortProductsCommand {
    pub by: Option<SortKey>,
}

impl Request<Result<(), ActionError>> for SortProductsCommand {}

pub struct SortProductsRequestHandler(pub DefaultNotifier<ProductEvent>);
impl RequestHandler<SortProductsCommand, Result<(), ActionError>> for SortProductsRequestHandler {
    fn handle(&mut self, command: SortProductsCommand) -> Result<(), ActionError> {
        self.0.publish(ProductEvent::Sorted(command.by))?;
        Ok(())
    }
}
