//! Builder for a single guarded case of a transition table.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::effects::{Reducer, TransitionError};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// One row of a transition table: when `guard` passes, `action` produces
/// the next state.
pub struct Case<S, E, Env> {
    pub guard: Guard<S, E>,
    pub action: Reducer<S, E, Env>,
}

impl<S, E, Env> Case<S, E, Env> {
    /// Whether this case handles `(state, event)` (pure).
    pub fn matches(&self, state: &S, event: &E) -> bool {
        self.guard.check(state, event)
    }
}

impl<S, E, Env> Clone for Case<S, E, Env> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

/// Builder for constructing cases with a fluent API.
pub struct CaseBuilder<S, E, Env> {
    guard: Option<Guard<S, E>>,
    action: Option<Reducer<S, E, Env>>,
}

impl<S, E, Env> CaseBuilder<S, E, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            guard: None,
            action: None,
        }
    }

    /// Set the guard (required).
    pub fn guard(mut self, guard: Guard<S, E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the guard from a closure (required).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S, &E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set an effectful action (required).
    pub fn then<F>(mut self, action: F) -> Self
    where
        F: Fn(S, E) -> BoxedEffect<S, TransitionError, Env> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set a side-effect-free action that computes the next state directly.
    pub fn goto<F>(self, step: F) -> Self
    where
        F: Fn(S, E) -> S + Send + Sync + 'static,
    {
        self.then(move |state, event| pure(step(state, event)).boxed())
    }

    pub fn build(self) -> Result<Case<S, E, Env>, BuildError> {
        let guard = self.guard.ok_or(BuildError::MissingGuard)?;
        let action = self.action.ok_or(BuildError::MissingAction)?;

        Ok(Case { guard, action })
    }
}

impl<S, E, Env> Default for CaseBuilder<S, E, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
