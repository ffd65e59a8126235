//! Core state machine types.
//!
//! Everything here is pure: the `State` trait describes the values a machine
//! threads through its transitions, and `Guard` selects transition cases.

mod guard;
mod state;

pub use guard::Guard;
pub use state::State;
