//! End-to-end checkout runs through the logging decorator and the fold driver.

use statefold::checkout::{
    checkout, BasketItem, Card, CheckoutEvent, CheckoutState, Price, RecordingEnv,
};
use statefold::effects::{
    run_fsm, show_json, with_logging, with_logging_shown, DiagnosticSink, MemorySink,
    TransitionError,
};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

fn price(text: &str) -> Price {
    text.parse().unwrap()
}

fn eggs() -> BasketItem {
    BasketItem::new("eggs", price("1.00"))
}

fn fish() -> BasketItem {
    BasketItem::new("fish", price("168.50"))
}

fn scenario() -> Vec<CheckoutEvent> {
    vec![
        CheckoutEvent::select_item(eggs()),
        CheckoutEvent::select_item(fish()),
        CheckoutEvent::Checkout,
        CheckoutEvent::select_card(Card::new("0000")),
        CheckoutEvent::Confirm,
        CheckoutEvent::PlaceOrder,
    ]
}

#[tokio::test]
async fn scenario_places_order_and_charges_once() {
    let env = RecordingEnv::new();
    let final_state = with_logging(checkout::<RecordingEnv>())
        .fold(CheckoutState::NoItems, scenario())
        .run(&env)
        .await
        .unwrap();

    assert_eq!(final_state, CheckoutState::OrderPlaced);

    let charges = env.charges();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].amount, price("169.50"));
    assert_eq!(charges[0].card, Card::new("0000"));
}

#[tokio::test]
async fn scenario_logs_six_pairs_in_order() {
    let env = RecordingEnv::new();
    with_logging(checkout::<RecordingEnv>())
        .fold(CheckoutState::NoItems, scenario())
        .run(&env)
        .await
        .unwrap();

    let pairs = env.log().pairs();
    assert_eq!(pairs.len(), 6);
    assert_eq!(env.log().len(), 12);

    let (first_state, first_event) = &pairs[0];
    assert_eq!(first_state, "NoItems");
    assert!(first_event.starts_with("SelectItem"));
    assert!(first_event.contains("eggs"));

    let state_prefixes: Vec<&str> = pairs
        .iter()
        .map(|(state, _)| state.split([' ', '{']).next().unwrap_or_default())
        .collect();
    assert_eq!(
        state_prefixes,
        vec!["NoItems", "HasItems", "HasItems", "NoCard", "CardSelected", "CardConfirmed"]
    );

    let event_prefixes: Vec<&str> = pairs
        .iter()
        .map(|(_, event)| event.split([' ', '{']).next().unwrap_or_default())
        .collect();
    assert_eq!(
        event_prefixes,
        vec!["SelectItem", "SelectItem", "Checkout", "SelectCard", "Confirm", "PlaceOrder"]
    );
}

#[tokio::test]
async fn building_the_run_has_no_side_effects() {
    let env = RecordingEnv::new();
    let run = with_logging(checkout::<RecordingEnv>()).fold(CheckoutState::NoItems, scenario());

    assert!(env.log().is_empty());
    assert!(env.charges().is_empty());

    drop(run);
    assert!(env.log().is_empty());
    assert!(env.charges().is_empty());
}

#[tokio::test]
async fn declined_charge_aborts_the_run() {
    let env = RecordingEnv::declining();
    let mut events = scenario();
    events.push(CheckoutEvent::Cancel);

    let result = with_logging(checkout::<RecordingEnv>())
        .fold(CheckoutState::NoItems, events)
        .run(&env)
        .await;

    assert_eq!(
        result,
        Err(TransitionError::ActionFailed(
            "card 0000 declined a charge of 169.50".to_string()
        ))
    );
    // The failing PlaceOrder step and the Cancel after it are never logged.
    assert_eq!(env.log().pairs().len(), 5);
    assert!(env.charges().is_empty());
}

#[tokio::test]
async fn cancel_then_resume_still_charges_full_basket() {
    let env = RecordingEnv::new();
    let events = vec![
        CheckoutEvent::select_item(eggs()),
        CheckoutEvent::Checkout,
        CheckoutEvent::select_card(Card::new("1111")),
        CheckoutEvent::Confirm,
        CheckoutEvent::Cancel,
        CheckoutEvent::select_item(fish()),
        CheckoutEvent::Checkout,
        CheckoutEvent::select_card(Card::new("2222")),
        CheckoutEvent::Confirm,
        CheckoutEvent::PlaceOrder,
        CheckoutEvent::PlaceOrder,
    ];

    let final_state = run_fsm(&checkout::<RecordingEnv>(), CheckoutState::NoItems, events)
        .run(&env)
        .await
        .unwrap();

    assert_eq!(final_state, CheckoutState::OrderPlaced);
    let charges = env.charges();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].card, Card::new("2222"));
    assert_eq!(charges[0].amount, price("169.50"));
}

#[tokio::test]
async fn invalid_events_are_ignored_mid_run() {
    let env = RecordingEnv::new();
    let events = vec![
        CheckoutEvent::PlaceOrder,
        CheckoutEvent::Confirm,
        CheckoutEvent::select_item(eggs()),
        CheckoutEvent::select_card(Card::new("0000")),
        CheckoutEvent::Checkout,
        CheckoutEvent::PlaceOrder,
    ];

    let final_state = with_logging(checkout::<RecordingEnv>())
        .fold(CheckoutState::NoItems, events)
        .run(&env)
        .await
        .unwrap();

    assert_eq!(
        final_state,
        CheckoutState::NoCard {
            items: statefold::checkout::Basket::of(eggs())
        }
    );
    assert!(env.charges().is_empty());
    assert_eq!(env.log().pairs().len(), 6);
}

#[tokio::test]
async fn json_rendered_log_lines_parse_back() {
    let env = RecordingEnv::new();
    let machine = with_logging_shown(
        checkout::<RecordingEnv>(),
        show_json::<CheckoutState>,
        show_json::<CheckoutEvent>,
    );

    machine
        .fold(CheckoutState::NoItems, scenario())
        .run(&env)
        .await
        .unwrap();

    let pairs = env.log().pairs();
    let states: Vec<CheckoutState> = pairs
        .iter()
        .map(|(state, _)| serde_json::from_str(state).unwrap())
        .collect();
    let events: Vec<CheckoutEvent> = pairs
        .iter()
        .map(|(_, event)| serde_json::from_str(event).unwrap())
        .collect();

    assert_eq!(states[0], CheckoutState::NoItems);
    assert_eq!(events, scenario());
}

#[tokio::test]
async fn machine_is_reused_across_independent_runs() {
    let machine = with_logging(checkout::<RecordingEnv>());
    let first = RecordingEnv::new();
    let second = RecordingEnv::new();

    let a = machine
        .fold(CheckoutState::NoItems, scenario())
        .run(&first)
        .await
        .unwrap();
    let b = machine
        .fold(CheckoutState::NoItems, scenario().into_iter().take(3))
        .run(&second)
        .await
        .unwrap();

    assert_eq!(a, CheckoutState::OrderPlaced);
    assert_eq!(b.items().map(|basket| basket.items().len()), Some(2));
    assert_eq!(first.log().pairs().len(), 6);
    assert_eq!(second.log().pairs().len(), 3);
    assert!(second.charges().is_empty());
}

fn record(tag: &'static str, value: u32) -> BoxedEffect<u32, TransitionError, MemorySink> {
    from_fn(move |env: &MemorySink| {
        env.write_line(tag);
        Ok::<u32, TransitionError>(value)
    })
    .boxed()
}

#[tokio::test]
async fn and_then_is_associative() {
    let left_env = MemorySink::new();
    let right_env = MemorySink::new();

    let left = record("a", 1)
        .and_then(|x| record("b", x + 1))
        .and_then(|y| record("c", y * 10));
    let right = record("a", 1).and_then(|x| record("b", x + 1).and_then(|y| record("c", y * 10)));

    assert_eq!(left.run(&left_env).await, Ok(20));
    assert_eq!(right.run(&right_env).await, Ok(20));
    assert_eq!(left_env.lines(), vec!["a", "b", "c"]);
    assert_eq!(left_env.lines(), right_env.lines());
}

#[tokio::test]
async fn map_and_pure_defer_work() {
    let env = MemorySink::new();
    let effect = record("side effect", 2).map(|x| x * 21);

    assert!(env.is_empty());
    assert_eq!(effect.run(&env).await, Ok(42));
    assert_eq!(env.lines(), vec!["side effect"]);

    let lifted: BoxedEffect<u32, TransitionError, MemorySink> = pure(7).boxed();
    assert_eq!(lifted.run(&env).await, Ok(7));
    assert_eq!(env.len(), 1);
}
