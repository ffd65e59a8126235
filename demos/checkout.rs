//! Checkout Workflow
//!
//! Drives the checkout machine through a full order with logging enabled.
//!
//! Key concepts:
//! - Transitions return effects instead of performing side effects
//! - Folding a sequence of events into one effect
//! - Logging as a decorator around the transition function
//! - Charging the card through the environment
//!
//! Run with: cargo run --example checkout
//! Set RUST_LOG=statefold=debug to see every transition as a tracing event.

use statefold::checkout::{checkout, BasketItem, Card, CheckoutEvent, CheckoutState, ConsoleEnv};
use statefold::core::State;
use statefold::effects::with_logging;
use stillwater::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statefold=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    println!("=== Checkout Workflow ===\n");

    let events = vec![
        CheckoutEvent::select_item(BasketItem::new("eggs", "1.00".parse()?)),
        CheckoutEvent::select_item(BasketItem::new("fish", "168.50".parse()?)),
        CheckoutEvent::Checkout,
        CheckoutEvent::select_card(Card::new("0000-0000-0000-0000")),
        CheckoutEvent::Confirm,
        CheckoutEvent::PlaceOrder,
    ];

    let machine = with_logging(checkout::<ConsoleEnv>());
    let run = machine.fold(CheckoutState::NoItems, events);

    // Nothing has been logged or charged yet.
    println!("Run built, executing against the console environment...\n");

    let final_state = run.run(&ConsoleEnv::new()).await?;

    println!("\nFinal state: {}", final_state.name());
    println!("Order placed: {}", final_state.is_final());

    Ok(())
}
