//! The checkout transition table.

use crate::checkout::env::PaymentGateway;
use crate::checkout::model::{calculate_price, Basket, Card};
use crate::checkout::state::{CheckoutEvent, CheckoutState};
use crate::effects::{Fsm, TransitionError};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// The checkout machine. Start it from [`CheckoutState::NoItems`].
pub fn checkout<Env>() -> Fsm<CheckoutState, CheckoutEvent, Env>
where
    Env: PaymentGateway + Clone + Send + Sync + 'static,
{
    Fsm::new(transition::<Env>)
}

/// One checkout step.
///
/// Arms are tried top to bottom and the first match wins. `Cancel` sits
/// above the `PlaceOrder` arm, so it takes precedence in any state that
/// could accept both. Every pair not listed leaves the state unchanged.
pub fn transition<Env>(
    state: CheckoutState,
    event: CheckoutEvent,
) -> BoxedEffect<CheckoutState, TransitionError, Env>
where
    Env: PaymentGateway + Clone + Send + Sync + 'static,
{
    use CheckoutEvent as Ev;
    use CheckoutState as St;

    match (state, event) {
        (St::NoItems, Ev::SelectItem { item }) => pure(St::HasItems {
            items: Basket::of(item),
        })
        .boxed(),
        (St::HasItems { items }, Ev::SelectItem { item }) => pure(St::HasItems {
            items: items.with(item),
        })
        .boxed(),
        (St::HasItems { items }, Ev::Checkout) => pure(St::NoCard { items }).boxed(),
        (St::NoCard { items }, Ev::SelectCard { card }) => {
            pure(St::CardSelected { items, card }).boxed()
        }
        (St::CardSelected { items, card }, Ev::Confirm) => {
            pure(St::CardConfirmed { items, card }).boxed()
        }
        (state, Ev::Cancel) => pure(cancel(state)).boxed(),
        (St::CardConfirmed { items, card }, Ev::PlaceOrder) => place_order(&items, &card),
        (state, _) => pure(state).boxed(),
    }
}

/// Drop the card (and its confirmation) but keep the items.
fn cancel(state: CheckoutState) -> CheckoutState {
    match state {
        CheckoutState::NoCard { items }
        | CheckoutState::CardSelected { items, .. }
        | CheckoutState::CardConfirmed { items, .. } => CheckoutState::HasItems { items },
        other => other,
    }
}

/// Charge the basket total, then move to `OrderPlaced`.
///
/// A total that does not fit in a `Price` fails the step without charging.
fn place_order<Env>(items: &Basket, card: &Card) -> BoxedEffect<CheckoutState, TransitionError, Env>
where
    Env: PaymentGateway + Clone + Send + Sync + 'static,
{
    let total = match calculate_price(items) {
        Ok(total) => total,
        Err(err) => return fail(TransitionError::action_failed(err)).boxed(),
    };
    let count = items.items().len();
    let card = card.clone();

    from_fn(move |_: &Env| {
        tracing::info!(items = count, %total, "placing order");
        Ok::<(), TransitionError>(())
    })
    .and_then(move |()| card.charge::<Env>(total))
    .map(|()| CheckoutState::OrderPlaced)
    .boxed()
}
