//! Errors surfaced when running a folded machine.

/// Failure raised by a side effect inside a transition.
///
/// Events that a state does not handle are never errors; they leave the
/// state unchanged. Only effects (such as charging a card) can fail, and a
/// failure stops the fold at the event that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Transition action failed: {0}")]
    ActionFailed(String),
}

impl TransitionError {
    pub fn action_failed(reason: impl std::fmt::Display) -> Self {
        Self::ActionFailed(reason.to_string())
    }
}
