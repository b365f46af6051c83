use crate::catalog::SharedCatalog;
use crate::views::UserRow;
use notifier::{Request, RequestHandler};

pub struct GetUserViewRequest;
impl Request<Vec<UserRow>> for GetUserViewRequest {}

pub struct GetUserViewRequestHandler(pub SharedCatalog);
impl RequestHandler<GetUserViewRequest, Vec<UserRow>> for GetUserViewRequestHandler {
    fn handle(&mut self, _: GetUserViewRequest) -> Vec<UserRow> {
        self.0.lock().user_view()
    }
}
