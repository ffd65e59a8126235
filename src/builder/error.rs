//! Build errors for transition tables and their cases.

use thiserror::Error;

/// Errors that can occur when building transition cases.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Case guard not specified. Call .when(predicate) or .guard(guard)")]
    MissingGuard,

    #[error("Case action not specified. Call .then(action) or .goto(step)")]
    MissingAction,
}
