//! Statefold: a minimal effectful finite-state machine engine
//!
//! A machine is one transition function, `(State, Event) -> Effect<State>`,
//! built on Stillwater's Effect system. Transitions describe their side
//! effects instead of performing them; folding a sequence of events chains
//! those descriptions into a single effect that runs once, in event order.
//!
//! # Core Concepts
//!
//! - **State**: type-safe machine states via the `State` trait
//! - **Fsm**: a shared, stateless transition function
//! - **Fold**: `Fsm::fold` applies an ordered sequence of events
//! - **Logging**: `with_logging` records each transition without changing it
//! - **Tables**: `TableBuilder` expresses ordered guarded cases
//!
//! # Example
//!
//! ```rust
//! use statefold::checkout::{checkout, BasketItem, Card, CheckoutEvent, CheckoutState, RecordingEnv};
//! use statefold::effects::with_logging;
//! use stillwater::prelude::*;
//!
//! let machine = with_logging(checkout::<RecordingEnv>());
//! let events = vec![
//!     CheckoutEvent::select_item(BasketItem::new("eggs", "1.00".parse().unwrap())),
//!     CheckoutEvent::select_item(BasketItem::new("fish", "168.50".parse().unwrap())),
//!     CheckoutEvent::Checkout,
//!     CheckoutEvent::select_card(Card::new("0000")),
//!     CheckoutEvent::Confirm,
//!     CheckoutEvent::PlaceOrder,
//! ];
//!
//! let env = RecordingEnv::new();
//! let run = machine.fold(CheckoutState::NoItems, events);
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let final_state = rt.block_on(run.run(&env)).unwrap();
//!
//! assert_eq!(final_state, CheckoutState::OrderPlaced);
//! assert_eq!(env.charges()[0].amount.to_string(), "169.50");
//! assert_eq!(env.log().pairs().len(), 6);
//! ```

pub mod builder;
pub mod checkout;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use builder::TableBuilder;
pub use crate::core::{Guard, State};
pub use effects::{run_fsm, with_logging, Fsm, TransitionError};
