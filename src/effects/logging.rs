//! Logging decorator for any [`Fsm`].
//!
//! Decoration wraps the transition function. The decorated machine reaches
//! exactly the same states as the undecorated one; it only adds two
//! diagnostic lines per successful transition: the state *before* the
//! transition, then the event that was applied.

use crate::core::State;
use crate::effects::error::TransitionError;
use crate::effects::fsm::Fsm;
use crate::effects::sink::DiagnosticSink;
use serde::Serialize;
use std::fmt::Debug;
use stillwater::prelude::*;

/// Render a value with its `Debug` representation.
pub fn show_debug<T: Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// Render a value as compact JSON, falling back to `Debug` if serialization fails.
pub fn show_json<T: Serialize + Debug>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| show_debug(value))
}

/// Wrap `fsm` so every transition is written to the environment's sink,
/// rendering states and events with `Debug`.
///
/// # Example
///
/// ```rust
/// use statefold::checkout::{checkout, BasketItem, CheckoutEvent, CheckoutState, RecordingEnv};
/// use statefold::core::State;
/// use statefold::effects::with_logging;
/// use stillwater::prelude::*;
///
/// let machine = with_logging(checkout::<RecordingEnv>());
/// let env = RecordingEnv::new();
/// let item = BasketItem::new("eggs", "1.00".parse().unwrap());
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let state = rt
///     .block_on(machine.fold(CheckoutState::NoItems, [CheckoutEvent::select_item(item)]).run(&env))
///     .unwrap();
///
/// assert_eq!(state.name(), "HasItems");
/// assert_eq!(env.log().len(), 2);
/// assert_eq!(env.log().lines()[0], "NoItems");
/// ```
pub fn with_logging<S, E, Env>(fsm: Fsm<S, E, Env>) -> Fsm<S, E, Env>
where
    S: State + 'static,
    E: Debug + Send + 'static,
    Env: DiagnosticSink + Clone + Send + Sync + 'static,
{
    with_logging_shown(fsm, show_debug::<S>, show_debug::<E>)
}

/// Like [`with_logging`], with caller-supplied renderers for states and events.
///
/// Rendering happens before the wrapped transition consumes its inputs, so
/// the logged state is always the pre-transition one. If the wrapped
/// transition fails, the failure passes through untouched and nothing is
/// written.
pub fn with_logging_shown<S, E, Env, FS, FE>(
    fsm: Fsm<S, E, Env>,
    show_state: FS,
    show_event: FE,
) -> Fsm<S, E, Env>
where
    S: State + 'static,
    E: Send + 'static,
    Env: DiagnosticSink + Clone + Send + Sync + 'static,
    FS: Fn(&S) -> String + Send + Sync + 'static,
    FE: Fn(&E) -> String + Send + Sync + 'static,
{
    Fsm::new(move |state: S, event: E| {
        let from = state.name().to_string();
        let state_line = show_state(&state);
        let event_line = show_event(&event);

        fsm.reduce(state, event)
            .and_then(move |next: S| {
                from_fn(move |env: &Env| {
                    env.write_line(&state_line);
                    env.write_line(&event_line);
                    tracing::debug!(from = %from, to = next.name(), event = %event_line, "transition");
                    Ok::<S, TransitionError>(next)
                })
            })
            .boxed()
    })
}
