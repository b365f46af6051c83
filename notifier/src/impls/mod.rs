/// Provides a default implementation of the `Notifier` trait.
mod default_notifier;
pub use default_notifier::*;
