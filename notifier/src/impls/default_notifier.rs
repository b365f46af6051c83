use crate::error::Error;
use crate::{Event, Listener, Notifier, Request, RequestHandler};
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

type SharedRegistry<K, H> = Arc<Mutex<HashMap<K, H>>>;

// A wrapper around the request handler to handle the request and return the result.
// Handlers are keyed by the request type, so the request and the response travel boxed.
#[derive(Clone)]
struct RequestHandlerWrapper {
    #[allow(clippy::type_complexity)]
    handler: Arc<Mutex<dyn FnMut(Box<dyn Any>) -> Box<dyn Any> + Send>>,
}

impl RequestHandlerWrapper {
    pub fn new<Req, Res, H>(mut handler: H) -> Self
    where
        Res: 'static,
        Req: Request<Res> + 'static,
        H: RequestHandler<Req, Res> + Send + 'static,
    {
        let f = move |req: Box<dyn Any>| -> Box<dyn Any> {
            match req.downcast::<Req>() {
                Ok(req) => Box::new(handler.handle(*req)),
                // Handed back untouched, the caller fails to downcast it as a response.
                Err(req) => req,
            }
        };

        RequestHandlerWrapper {
            handler: Arc::new(Mutex::new(f)),
        }
    }

    pub fn handle<Req, Res>(&self, req: Req) -> crate::Result<Option<Res>>
    where
        Res: 'static,
        Req: Request<Res> + 'static,
    {
        let mut handler = self
            .handler
            .try_lock()
            .ok_or_else(Error::handler_busy::<Req>)?;

        let res = (handler)(Box::new(req));
        Ok(res.downcast::<Res>().map(|res| *res).ok())
    }
}

// A wrapper around a listener, shared between every kind it was subscribed to.
struct ListenerWrapper<E> {
    #[allow(clippy::type_complexity)]
    listener: Arc<Mutex<dyn FnMut(&E) + Send>>,
}

impl<E> Clone for ListenerWrapper<E> {
    fn clone(&self) -> Self {
        ListenerWrapper {
            listener: Arc::clone(&self.listener),
        }
    }
}

impl<E: Event> ListenerWrapper<E> {
    pub fn new<L>(mut listener: L) -> Self
    where
        L: Listener<E> + Send + 'static,
    {
        let f = move |event: &E| listener.update(event);

        ListenerWrapper {
            listener: Arc::new(Mutex::new(f)),
        }
    }

    pub fn update(&self, event: &E) -> crate::Result<()> {
        let mut listener = self
            .listener
            .try_lock()
            .ok_or_else(|| Error::listener_busy(event.kind()))?;

        (listener)(event);
        Ok(())
    }
}

/// A default implementation for the [Notifier] trait.
///
/// Every value of `E::Kind` is a registered kind, publishing a kind nobody
/// subscribed to is a no-op.
///
/// # Examples
///
/// ## Request handler
/// ```
/// use notifier::{DefaultNotifier, Event, Notifier, Request, RequestHandler};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Tick;
///
/// struct Ticked;
/// impl Event for Ticked {
///     type Kind = Tick;
///     fn kind(&self) -> Tick { Tick }
/// }
///
/// struct NextId;
/// impl Request<u64> for NextId {}
///
/// struct NextIdHandler(u64);
/// impl RequestHandler<NextId, u64> for NextIdHandler {
///     fn handle(&mut self, _: NextId) -> u64 {
///         self.0 += 1;
///         self.0
///     }
/// }
///
/// let mut notifier = DefaultNotifier::<Ticked>::builder()
///     .add_handler(NextIdHandler(0))
///     .build();
///
/// assert_eq!(Ok(1), notifier.send(NextId));
/// assert_eq!(Ok(2), notifier.send(NextId));
/// ```
///
/// ## Listeners
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use notifier::{DefaultNotifier, Event, Notifier};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum DoorKind { Opened, Closed }
///
/// struct DoorEvent(DoorKind);
/// impl Event for DoorEvent {
///     type Kind = DoorKind;
///     fn kind(&self) -> DoorKind { self.0 }
/// }
///
/// let opened = Arc::new(AtomicUsize::new(0));
/// let counter = opened.clone();
///
/// let mut notifier = DefaultNotifier::<DoorEvent>::builder()
///     .subscribe_fn(DoorKind::Opened, move |_: &DoorEvent| {
///         counter.fetch_add(1, Ordering::SeqCst);
///     })
///     .build();
///
/// notifier.publish(DoorEvent(DoorKind::Opened)).unwrap();
/// notifier.publish(DoorEvent(DoorKind::Closed)).unwrap();
/// assert_eq!(1, opened.load(Ordering::SeqCst));
/// ```
pub struct DefaultNotifier<E: Event> {
    request_handlers: SharedRegistry<TypeId, RequestHandlerWrapper>,
    listeners: SharedRegistry<E::Kind, Vec<ListenerWrapper<E>>>,
}

impl<E: Event> Clone for DefaultNotifier<E> {
    fn clone(&self) -> Self {
        DefaultNotifier {
            request_handlers: Arc::clone(&self.request_handlers),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<E: Event> DefaultNotifier<E> {
    /// Gets a [DefaultNotifier] builder.
    pub fn builder() -> DefaultNotifierBuilder<E> {
        DefaultNotifierBuilder::new()
    }

    /// Subscribes a listener to `kind`, after every listener already subscribed to it.
    ///
    /// The same listener subscribed twice is invoked twice.
    pub fn subscribe<L>(&self, kind: E::Kind, listener: L)
    where
        L: Listener<E> + Send + 'static,
    {
        self.register(kind, ListenerWrapper::new(listener));
    }

    /// Returns the number of listeners subscribed to `kind`.
    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.listeners.lock().get(&kind).map_or(0, Vec::len)
    }

    fn register(&self, kind: E::Kind, listener: ListenerWrapper<E>) {
        self.listeners.lock().entry(kind).or_default().push(listener);
    }
}

impl<E: Event> Notifier<E> for DefaultNotifier<E> {
    fn send<Req, Res>(&mut self, req: Req) -> crate::Result<Res>
    where
        Res: 'static,
        Req: Request<Res> + 'static,
    {
        let type_id = TypeId::of::<Req>();

        // Cloned so the registry is unlocked while the handler runs
        let handler = self.request_handlers.lock().get(&type_id).cloned();

        match handler {
            Some(handler) => handler
                .handle(req)?
                .ok_or_else(Error::handler_not_found::<Req>),
            None => Err(Error::handler_not_found::<Req>()),
        }
    }

    fn publish(&mut self, event: E) -> crate::Result<()> {
        let kind = event.kind();

        // Cloned so listeners can subscribe or publish while being notified
        let listeners = self
            .listeners
            .lock()
            .get(&kind)
            .cloned()
            .unwrap_or_default();

        log::trace!("publishing {:?} to {} listener(s)", kind, listeners.len());

        for listener in listeners {
            listener.update(&event)?;
        }

        Ok(())
    }
}

/// A builder for the [DefaultNotifier].
pub struct DefaultNotifierBuilder<E: Event> {
    inner: DefaultNotifier<E>,
}

impl<E: Event> DefaultNotifierBuilder<E> {
    /// Constructs a new `DefaultNotifierBuilder`.
    pub fn new() -> Self {
        DefaultNotifierBuilder {
            inner: DefaultNotifier {
                request_handlers: SharedRegistry::default(),
                listeners: SharedRegistry::default(),
            },
        }
    }

    /// Registers a request handler, replacing any handler of the same request type.
    pub fn add_handler<Req, Res, H>(self, handler: H) -> Self
    where
        Res: 'static,
        Req: Request<Res> + 'static,
        H: RequestHandler<Req, Res> + Send + 'static,
    {
        self.inner
            .request_handlers
            .lock()
            .insert(TypeId::of::<Req>(), RequestHandlerWrapper::new(handler));
        self
    }

    /// Registers a request handler from a function.
    pub fn add_handler_fn<Req, Res, F>(self, handler: F) -> Self
    where
        Res: 'static,
        Req: Request<Res> + 'static,
        F: FnMut(Req) -> Res + Send + 'static,
    {
        self.add_handler(handler)
    }

    /// Register a request handler using a copy of the notifier.
    pub fn add_handler_deferred<Req, Res, H, F>(self, f: F) -> Self
    where
        Res: 'static,
        Req: Request<Res> + 'static,
        H: RequestHandler<Req, Res> + Send + 'static,
        F: FnOnce(DefaultNotifier<E>) -> H,
    {
        let handler = f(self.inner.clone());
        self.add_handler(handler)
    }

    /// Subscribes a listener to `kind`.
    pub fn subscribe<L>(self, kind: E::Kind, listener: L) -> Self
    where
        L: Listener<E> + Send + 'static,
    {
        self.inner.subscribe(kind, listener);
        self
    }

    /// Subscribes a function to `kind`.
    pub fn subscribe_fn<F>(self, kind: E::Kind, listener: F) -> Self
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.subscribe(kind, listener)
    }

    /// Subscribes a listener to `kind` using a copy of the notifier.
    pub fn subscribe_deferred<L, F>(self, kind: E::Kind, f: F) -> Self
    where
        L: Listener<E> + Send + 'static,
        F: FnOnce(DefaultNotifier<E>) -> L,
    {
        let listener = f(self.inner.clone());
        self.subscribe(kind, listener)
    }

    /// Builds a `DefaultNotifier`.
    pub fn build(self) -> DefaultNotifier<E> {
        self.inner
    }
}

impl<E: Event> Default for DefaultNotifierBuilder<E> {
    fn default() -> Self {
        DefaultNotifierBuilder::new()
    }
}
