//! The `State` trait implemented by every machine state type.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// A state is a plain value: the machine never stores it, it only threads it
/// from one transition into the next. Inspection methods are pure.
///
/// # Example
///
/// ```rust
/// use statefold::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Turnstile {
///     Locked,
///     Unlocked { coins: u32 },
///     Broken,
/// }
///
/// impl State for Turnstile {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked { .. } => "Unlocked",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert_eq!(Turnstile::Unlocked { coins: 2 }.name(), "Unlocked");
/// assert!(!Turnstile::Locked.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Variant name, without payload, for tracing and diagnostics.
    fn name(&self) -> &str;

    /// Whether this state is absorbing: no event moves the machine out of it.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
