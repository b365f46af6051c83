use crate::request::Request;
use crate::Event;

/// A notifier fans events out to their listeners and routes requests to their handler.
pub trait Notifier<E: Event> {
    /// Sends a request to its handler and returns the response.
    fn send<Req, Res>(&mut self, req: Req) -> crate::Result<Res>
    where
        Res: 'static,
        Req: Request<Res> + 'static;

    /// Publish an event to every listener subscribed to its kind, in subscription order.
    fn publish(&mut self, event: E) -> crate::Result<()>;
}
