//! Checkout states and events.

use crate::checkout::model::{Basket, BasketItem, Card};
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Phases of a checkout. Each variant carries only what that phase needs.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum CheckoutState {
    NoItems,
    HasItems { items: Basket },
    NoCard { items: Basket },
    CardSelected { items: Basket, card: Card },
    CardConfirmed { items: Basket, card: Card },
    OrderPlaced,
}

impl CheckoutState {
    pub fn items(&self) -> Option<&Basket> {
        match self {
            Self::HasItems { items }
            | Self::NoCard { items }
            | Self::CardSelected { items, .. }
            | Self::CardConfirmed { items, .. } => Some(items),
            Self::NoItems | Self::OrderPlaced => None,
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            Self::CardSelected { card, .. } | Self::CardConfirmed { card, .. } => Some(card),
            _ => None,
        }
    }
}

impl State for CheckoutState {
    fn name(&self) -> &str {
        match self {
            Self::NoItems => "NoItems",
            Self::HasItems { .. } => "HasItems",
            Self::NoCard { .. } => "NoCard",
            Self::CardSelected { .. } => "CardSelected",
            Self::CardConfirmed { .. } => "CardConfirmed",
            Self::OrderPlaced => "OrderPlaced",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::OrderPlaced)
    }
}

/// Inputs to the checkout machine.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum CheckoutEvent {
    SelectItem { item: BasketItem },
    Checkout,
    SelectCard { card: Card },
    Confirm,
    PlaceOrder,
    Cancel,
}

impl CheckoutEvent {
    pub fn select_item(item: BasketItem) -> Self {
        Self::SelectItem { item }
    }

    pub fn select_card(card: Card) -> Self {
        Self::SelectCard { card }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectItem { .. } => "SelectItem",
            Self::Checkout => "Checkout",
            Self::SelectCard { .. } => "SelectCard",
            Self::Confirm => "Confirm",
            Self::PlaceOrder => "PlaceOrder",
            Self::Cancel => "Cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basket() -> Basket {
        Basket::of(BasketItem::new("eggs", "1.00".parse().unwrap()))
    }

    #[test]
    fn only_order_placed_is_final() {
        let card = Card::new("0000");
        let states = [
            CheckoutState::NoItems,
            CheckoutState::HasItems { items: basket() },
            CheckoutState::NoCard { items: basket() },
            CheckoutState::CardSelected {
                items: basket(),
                card: card.clone(),
            },
            CheckoutState::CardConfirmed {
                items: basket(),
                card,
            },
        ];

        assert!(states.iter().all(|s| !s.is_final()));
        assert!(CheckoutState::OrderPlaced.is_final());
    }

    #[test]
    fn accessors_expose_payload() {
        let state = CheckoutState::CardSelected {
            items: basket(),
            card: Card::new("0000"),
        };

        assert_eq!(state.name(), "CardSelected");
        assert_eq!(state.items(), Some(&basket()));
        assert_eq!(state.card().map(Card::identifier), Some("0000"));
        assert_eq!(CheckoutState::NoItems.items(), None);
        assert_eq!(CheckoutState::NoCard { items: basket() }.card(), None);
    }

    #[test]
    fn default_rendering_is_structural() {
        let event = CheckoutEvent::select_item(BasketItem::new("eggs", "1.00".parse().unwrap()));

        assert_eq!(format!("{:?}", CheckoutState::NoItems), "NoItems");
        assert_eq!(
            format!("{event:?}"),
            r#"SelectItem { item: BasketItem { name: "eggs", price: 1.00 } }"#
        );
        assert_eq!(event.name(), "SelectItem");
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = CheckoutState::CardConfirmed {
            items: basket(),
            card: Card::new("0000-0000-0000-0000"),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: CheckoutState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn state_with_empty_items_is_not_deserializable() {
        let json = r#"{"HasItems":{"items":[]}}"#;
        assert!(serde_json::from_str::<CheckoutState>(json).is_err());
    }
}
