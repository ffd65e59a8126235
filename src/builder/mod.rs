//! Builder API for transition tables.
//!
//! A table is an ordered list of guarded cases. Evaluation is top to bottom,
//! the first case whose guard passes handles the pair, and pairs no case
//! handles leave the state unchanged. The result is an ordinary
//! [`Fsm`](crate::effects::Fsm), so it can be folded and decorated like any
//! other machine.

pub mod case;
pub mod error;
pub mod table;

pub use case::{Case, CaseBuilder};
pub use error::BuildError;
pub use table::TableBuilder;

use crate::core::{Guard, State};
use crate::effects::TransitionError;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Create a case from a guard closure and an effectful action.
pub fn case<S, E, Env, G, A>(guard: G, action: A) -> Case<S, E, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    G: Fn(&S, &E) -> bool + Send + Sync + 'static,
    A: Fn(S, E) -> BoxedEffect<S, TransitionError, Env> + Send + Sync + 'static,
{
    Case {
        guard: Guard::new(guard),
        action: Arc::new(action),
    }
}

/// Create a case whose action computes the next state without side effects.
///
/// # Example
///
/// ```
/// use statefold::builder::pure_case;
/// use statefold::builder::Case;
///
/// # use serde::{Deserialize, Serialize};
/// # use statefold::core::State;
/// # #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// # enum Mode { Idle, Active }
/// # impl State for Mode {
/// #     fn name(&self) -> &str { "Mode" }
/// # }
/// let wake: Case<Mode, (), ()> = pure_case(|s, _| *s == Mode::Idle, |_, _| Mode::Active);
/// assert!(wake.matches(&Mode::Idle, &()));
/// ```
pub fn pure_case<S, E, Env, G, F>(guard: G, step: F) -> Case<S, E, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    G: Fn(&S, &E) -> bool + Send + Sync + 'static,
    F: Fn(S, E) -> S + Send + Sync + 'static,
{
    case(guard, move |state, event| pure(step(state, event)).boxed())
}
