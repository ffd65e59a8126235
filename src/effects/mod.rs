//! Effectful machines built on Stillwater 0.11.
//!
//! A transition never does anything by itself: `reduce` returns a
//! `BoxedEffect` describing the work, and folding a sequence of events chains
//! those descriptions with `and_then`. Side effects (diagnostic lines, card
//! charges) only happen when the caller runs the final effect against an
//! environment.
//!
//! # Key Concepts
//!
//! - **Fsm**: a shared transition function `(S, E) -> Effect<S>`
//! - **Fold**: `Fsm::fold` / `run_fsm` turn one step into a whole run
//! - **Logging**: `with_logging` decorates any machine without changing the
//!   states it reaches
//! - **Environment**: capabilities such as `DiagnosticSink` are read from the
//!   `Env` the effect is run with

mod error;
mod fsm;
mod logging;
mod sink;

pub use error::TransitionError;
pub use fsm::{run_fsm, Fsm, Reducer};
pub use logging::{show_debug, show_json, with_logging, with_logging_shown};
pub use sink::{DiagnosticSink, MemorySink, StderrSink};
