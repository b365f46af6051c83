use crate::catalog::SharedCatalog;
use crate::views::ExecutiveView;
use notifier::{Request, RequestHandler};

pub struct GetExecutiveViewRequest;
impl Request<ExecutiveView> for GetExecutiveViewRequest {}

pub struct GetExecutiveViewRequestHandler(pub SharedCatalog);
impl RequestHandler<GetExecutiveViewRequest, ExecutiveView> for GetExecutiveViewRequestHandler {
    fn handle(&mut self, _: GetExecutiveViewRequest) -> ExecutiveView {
        self.0.lock().executive_view()
    }
}
