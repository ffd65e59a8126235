//! Checkout workflow: the example machine driven by the engine.
//!
//! ```text
//! NoItems --SelectItem--> HasItems --Checkout--> NoCard --SelectCard--> CardSelected
//!            HasItems <--SelectItem--'                                       |
//!                                                                         Confirm
//!                                                                            v
//!                      OrderPlaced <--PlaceOrder (charges card)-- CardConfirmed
//!
//! Cancel from NoCard, CardSelected or CardConfirmed returns to HasItems.
//! ```

mod env;
mod machine;
mod model;
mod price;
mod state;

pub use env::{Charge, ConsoleEnv, PaymentError, PaymentGateway, RecordingEnv};
pub use machine::{checkout, transition};
pub use model::{calculate_price, Basket, BasketItem, Card, EmptyBasket};
pub use price::{Price, PriceError};
pub use state::{CheckoutEvent, CheckoutState};
