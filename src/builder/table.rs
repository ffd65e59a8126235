//! Builder for transition tables evaluated as ordered guarded cases.

use crate::builder::case::{Case, CaseBuilder};
use crate::builder::error::BuildError;
use crate::core::State;
use crate::effects::{Fsm, Reducer, TransitionError};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Builds an [`Fsm`] from cases checked top to bottom.
///
/// The first case whose guard passes handles the pair. When no case
/// matches, the state is returned unchanged, unless a fallback was set with
/// [`otherwise`](TableBuilder::otherwise).
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use statefold::builder::{TableBuilder, pure_case};
/// use statefold::core::State;
/// use stillwater::prelude::*;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Gate { Closed, Open }
///
/// impl State for Gate {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// #[derive(Debug)]
/// enum Press { Button }
///
/// let gate = TableBuilder::<Gate, Press, ()>::new()
///     .add_case(pure_case(|s, _| *s == Gate::Closed, |_, _| Gate::Open))
///     .build();
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let state = rt.block_on(gate.fold(Gate::Closed, [Press::Button, Press::Button]).run(&())).unwrap();
/// assert_eq!(state, Gate::Open);
/// ```
pub struct TableBuilder<S, E, Env> {
    cases: Vec<Case<S, E, Env>>,
    fallback: Option<Reducer<S, E, Env>>,
}

impl<S, E, Env> TableBuilder<S, E, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            fallback: None,
        }
    }

    /// Append a case using a builder.
    /// Returns an error if the builder fails validation.
    pub fn case(mut self, builder: CaseBuilder<S, E, Env>) -> Result<Self, BuildError> {
        let case = builder.build()?;
        self.cases.push(case);
        Ok(self)
    }

    /// Append a pre-built case.
    pub fn add_case(mut self, case: Case<S, E, Env>) -> Self {
        self.cases.push(case);
        self
    }

    /// Append several cases, keeping their order.
    pub fn cases(mut self, cases: Vec<Case<S, E, Env>>) -> Self {
        self.cases.extend(cases);
        self
    }

    /// Replace the unchanged-state default for unmatched pairs.
    pub fn otherwise<F>(mut self, action: F) -> Self
    where
        F: Fn(S, E) -> BoxedEffect<S, TransitionError, Env> + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(action));
        self
    }

    pub fn build(self) -> Fsm<S, E, Env> {
        let cases = self.cases;
        let fallback = self.fallback;

        Fsm::new(move |state: S, event: E| {
            if let Some(case) = cases.iter().find(|c| c.matches(&state, &event)) {
                return (case.action)(state, event);
            }

            match &fallback {
                Some(action) => action(state, event),
                None => pure(state).boxed(),
            }
        })
    }
}

impl<S, E, Env> Default for TableBuilder<S, E, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
