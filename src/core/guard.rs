//! Guard predicates over a `(state, event)` pair.
//!
//! Guards select which case of a transition table applies. They are pure:
//! evaluating one never performs a side effect.

use std::sync::Arc;

/// Pure predicate deciding whether a table case handles `(state, event)`.
///
/// # Example
///
/// ```rust
/// use statefold::core::Guard;
///
/// #[derive(Debug)]
/// enum Light { Red, Green }
/// #[derive(Debug)]
/// enum Signal { Go, Stop }
///
/// let go_on_red = Guard::new(|s: &Light, e: &Signal| {
///     matches!((s, e), (Light::Red, Signal::Go))
/// });
///
/// assert!(go_on_red.check(&Light::Red, &Signal::Go));
/// assert!(!go_on_red.check(&Light::Green, &Signal::Go));
/// assert!(!go_on_red.check(&Light::Red, &Signal::Stop));
/// ```
pub struct Guard<S, E> {
    predicate: Arc<dyn Fn(&S, &E) -> bool + Send + Sync>,
}

impl<S, E> Guard<S, E> {
    /// Create a guard from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that only looks at the event, whatever the current state.
    pub fn on_event<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self::new(move |_, event| predicate(event))
    }

    /// Guard that passes for every pair.
    pub fn always() -> Self {
        Self::new(|_, _| true)
    }

    pub fn check(&self, state: &S, event: &E) -> bool {
        (self.predicate)(state, event)
    }
}

impl<S, E> Clone for Guard<S, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
