/// Represents a request sent through the notifier.
pub trait Request<Res> {}

/// Handles a request sent through the notifier.
pub trait RequestHandler<Req, Res>
where
    Req: Request<Res>,
{
    /// Handle a request and returns the response.
    fn handle(&mut self, req: Req) -> Res;
}

impl<Req, Res, F> RequestHandler<Req, Res> for F
where
    Req: Request<Res>,
    F: FnMut(Req) -> Res,
{
    fn handle(&mut self, req: Req) -> Res {
        self(req)
    }
}
