//! # notifier
//! A typed, synchronous event notifier.
//!
//! Events belong to a closed set of kinds, listeners subscribe to a kind and are
//! invoked in subscription order every time an event of that kind is published.
//! The notifier also routes typed requests to a single handler, which lets command
//! handlers validate input before publishing the event that describes the change.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use notifier::{DefaultNotifier, Event, Notifier, Request, RequestHandler};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum StockKind {
//!     Received,
//!     Shipped,
//! }
//!
//! #[derive(Debug, Clone)]
//! enum StockEvent {
//!     Received(u32),
//!     Shipped(u32),
//! }
//!
//! impl Event for StockEvent {
//!     type Kind = StockKind;
//!
//!     fn kind(&self) -> StockKind {
//!         match self {
//!             StockEvent::Received(_) => StockKind::Received,
//!             StockEvent::Shipped(_) => StockKind::Shipped,
//!         }
//!     }
//! }
//!
//! // Requests
//! struct ShipRequest(u32);
//! impl Request<bool> for ShipRequest {}
//!
//! struct ShipRequestHandler(Arc<Mutex<u32>>, DefaultNotifier<StockEvent>);
//! impl RequestHandler<ShipRequest, bool> for ShipRequestHandler {
//!     fn handle(&mut self, req: ShipRequest) -> bool {
//!         if *self.0.lock() < req.0 {
//!             return false;
//!         }
//!
//!         self.1.publish(StockEvent::Shipped(req.0)).is_ok()
//!     }
//! }
//!
//! let stock = Arc::new(Mutex::new(0_u32));
//!
//! let mut notifier = DefaultNotifier::<StockEvent>::builder()
//!     .add_handler_deferred(|n| ShipRequestHandler(stock.clone(), n))
//!     .subscribe_fn(StockKind::Received, {
//!         let stock = stock.clone();
//!         move |event: &StockEvent| {
//!             if let StockEvent::Received(count) = event {
//!                 *stock.lock() += count;
//!             }
//!         }
//!     })
//!     .subscribe_fn(StockKind::Shipped, {
//!         let stock = stock.clone();
//!         move |event: &StockEvent| {
//!             if let StockEvent::Shipped(count) = event {
//!                 *stock.lock() -= count;
//!             }
//!         }
//!     })
//!     .build();
//!
//! notifier.publish(StockEvent::Received(10)).unwrap();
//! assert_eq!(Ok(true), notifier.send(ShipRequest(4)));
//! assert_eq!(Ok(false), notifier.send(ShipRequest(7)));
//! assert_eq!(6, *stock.lock());
//! ```

/// A convenient result type.
pub type Result<T> = std::result::Result<T, error::Error>;

/// Module for the requests.
mod request;
pub use request::*;

/// Module for the events and their listeners.
mod event;
pub use event::*;

/// Module for the errors.
mod error;
pub use error::*;

/// Module for the notifier.
mod notifier;
pub use crate::notifier::*;

/// Provides the default implementation.
mod impls;
pub use impls::*;
