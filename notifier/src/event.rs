use std::fmt::Debug;
use std::hash::Hash;

/// Represents an application event.
///
/// Every event carries a kind taken from a closed set, listeners subscribe to kinds.
pub trait Event: 'static {
    /// The closed set of kinds for this event, usually a fieldless enum.
    type Kind: Copy + Eq + Hash + Debug + Send + 'static;

    /// Returns the kind of this event.
    fn kind(&self) -> Self::Kind;
}

/// Reacts to the events of the kinds it was subscribed to.
pub trait Listener<E: Event> {
    /// Handles an event.
    fn update(&mut self, event: &E);
}

///////////////////// Implementations /////////////////////

impl<E, F> Listener<E> for F
where
    E: Event,
    F: FnMut(&E),
{
    fn update(&mut self, event: &E) {
        self(event)
    }
}
