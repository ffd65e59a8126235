//! The FSM core and the sequence-fold driver.

use crate::core::State;
use crate::effects::error::TransitionError;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Shared transition function: `(state, event) -> effect producing the next state`.
pub type Reducer<S, E, Env> =
    Arc<dyn Fn(S, E) -> BoxedEffect<S, TransitionError, Env> + Send + Sync>;

/// A finite-state machine defined by a single effectful transition function.
///
/// The machine holds no state of its own. The current state is the value
/// threaded through `reduce`, so one `Fsm` can drive any number of runs, and
/// clones share the same transition function.
///
/// `reduce` must be total: pairs the machine does not care about should
/// return the state unchanged with `pure(state)`.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use statefold::core::State;
/// use statefold::effects::Fsm;
/// use stillwater::prelude::*;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Count(u32);
///
/// impl State for Count {
///     fn name(&self) -> &str {
///         "Count"
///     }
/// }
///
/// let counter: Fsm<Count, u32, ()> = Fsm::new(|Count(n), step| pure(Count(n + step)).boxed());
///
/// let run = counter.fold(Count(0), vec![1, 2, 3]);
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// assert_eq!(rt.block_on(run.run(&())).unwrap(), Count(6));
/// ```
pub struct Fsm<S, E, Env> {
    reduce: Reducer<S, E, Env>,
}

impl<S, E, Env> Fsm<S, E, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    pub fn new<F>(reduce: F) -> Self
    where
        F: Fn(S, E) -> BoxedEffect<S, TransitionError, Env> + Send + Sync + 'static,
    {
        Self {
            reduce: Arc::new(reduce),
        }
    }

    /// Describe the transition for one event. Nothing runs until the
    /// returned effect is run.
    pub fn reduce(&self, state: S, event: E) -> BoxedEffect<S, TransitionError, Env> {
        (self.reduce)(state, event)
    }

    /// Left-fold `events` over `initial`, producing one effect for the whole run.
    ///
    /// Each event's transition is chained onto the previous one with
    /// `and_then`, so side effects happen in event order and the first
    /// failure skips every later event.
    pub fn fold<I>(&self, initial: S, events: I) -> BoxedEffect<S, TransitionError, Env>
    where
        I: IntoIterator<Item = E>,
    {
        let start: BoxedEffect<S, TransitionError, Env> = pure(initial).boxed();

        events.into_iter().fold(start, |run, event| {
            let machine = self.clone();
            run.and_then(move |state| machine.reduce(state, event))
                .boxed()
        })
    }
}

impl<S, E, Env> Clone for Fsm<S, E, Env> {
    fn clone(&self) -> Self {
        Self {
            reduce: Arc::clone(&self.reduce),
        }
    }
}

/// Free-function form of [`Fsm::fold`].
pub fn run_fsm<S, E, Env, I>(
    fsm: &Fsm<S, E, Env>,
    initial: S,
    events: I,
) -> BoxedEffect<S, TransitionError, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = E>,
{
    fsm.fold(initial, events)
}
