use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

/// What went wrong while dispatching a request or an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No handler is registered for the request type.
    HandlerNotFound,
    /// The handler or listener is already running further up the call stack.
    Busy,
}

/// A failed `send` or `publish`, naming the request type or event kind involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    target: Cow<'static, str>,
}

impl Error {
    /// No handler answers requests of type `Req`.
    pub fn handler_not_found<Req>() -> Error {
        Error {
            kind: ErrorKind::HandlerNotFound,
            target: Cow::Borrowed(type_name::<Req>()),
        }
    }

    /// The handler for `Req` was asked to handle a request while handling another.
    pub fn handler_busy<Req>() -> Error {
        Error {
            kind: ErrorKind::Busy,
            target: Cow::Borrowed(type_name::<Req>()),
        }
    }

    /// A listener of `kind` was triggered again from inside its own update.
    pub fn listener_busy<K: fmt::Debug>(kind: K) -> Error {
        Error {
            kind: ErrorKind::Busy,
            target: Cow::Owned(format!("{:?} listener", kind)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The request type or listener the error is about.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::HandlerNotFound => write!(f, "no handler registered for `{}`", self.target),
            ErrorKind::Busy => write!(f, "`{}` is already running", self.target),
        }
    }
}

impl std::error::Error for Error {}
