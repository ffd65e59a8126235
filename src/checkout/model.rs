//! Basket items, the non-empty basket, and payment cards.

use crate::checkout::env::PaymentGateway;
use crate::checkout::price::{Price, PriceError};
use crate::effects::TransitionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use thiserror::Error;

/// A product in the basket. Items are values: once built they do not change.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BasketItem {
    name: String,
    price: Price,
}

impl BasketItem {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// Sum of item prices. An empty collection costs zero.
///
/// Returns [`PriceError::Overflow`] when the total does not fit in a [`Price`].
pub fn calculate_price<'a, I>(items: I) -> Result<Price, PriceError>
where
    I: IntoIterator<Item = &'a BasketItem>,
{
    Price::checked_sum(items.into_iter().map(BasketItem::price)).ok_or(PriceError::Overflow)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a basket must hold at least one item")]
pub struct EmptyBasket;

/// Ordered, append-only, never-empty list of items.
///
/// The only ways to obtain a `Basket` are [`Basket::of`] and
/// [`Basket::with`], plus `TryFrom<Vec<_>>` (also used when deserializing),
/// which rejects an empty list.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BasketItem>", into = "Vec<BasketItem>")]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    pub fn of(first: BasketItem) -> Self {
        Self { items: vec![first] }
    }

    /// Append `item` after the existing ones.
    pub fn with(mut self, item: BasketItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    pub fn first(&self) -> &BasketItem {
        &self.items[0]
    }

    pub fn total(&self) -> Result<Price, PriceError> {
        calculate_price(&self.items)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BasketItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = &'a BasketItem;
    type IntoIter = std::slice::Iter<'a, BasketItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl TryFrom<Vec<BasketItem>> for Basket {
    type Error = EmptyBasket;

    fn try_from(items: Vec<BasketItem>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            Err(EmptyBasket)
        } else {
            Ok(Self { items })
        }
    }
}

impl From<Basket> for Vec<BasketItem> {
    fn from(basket: Basket) -> Self {
        basket.items
    }
}

impl fmt::Debug for Basket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

/// Opaque reference to a payment method.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Card {
    identifier: String,
}

impl Card {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Describe charging `amount` to this card.
    ///
    /// Nothing is charged until the effect runs; it then calls the
    /// environment's [`PaymentGateway`] exactly once. A declined charge
    /// becomes [`TransitionError::ActionFailed`].
    pub fn charge<Env>(&self, amount: Price) -> BoxedEffect<(), TransitionError, Env>
    where
        Env: PaymentGateway + Clone + Send + Sync + 'static,
    {
        let card = self.clone();
        from_fn(move |env: &Env| {
            tracing::info!(card = card.identifier(), %amount, "charging card");
            env.charge(&card, amount).map_err(|err| {
                tracing::warn!(card = card.identifier(), %amount, error = %err, "charge failed");
                TransitionError::action_failed(err)
            })
        })
        .boxed()
    }
}
