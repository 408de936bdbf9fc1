use railbird_engine::chips::{ChipStack, DENOMINATIONS};
use railbird_engine::errors::GameError;

#[test]
fn starting_stack_breakdown_matches_total() {
    let stack = ChipStack::from_amount(5_000);
    assert_eq!(stack.total(), 5_000);
    assert_eq!(stack.count(1000), 5);
    assert!(stack.unknown_denominations().is_empty());
}

#[test]
fn payments_move_exact_value_between_stacks() {
    let mut player = ChipStack::from_counts([(500, 2), (100, 5), (25, 8), (5, 10), (1, 25)]);
    let mut pot = ChipStack::new();
    let before = player.total();

    for amount in [25, 50, 130, 7, 999] {
        let chips = player.withdraw(amount).unwrap();
        assert_eq!(chips.total(), amount);
        pot.deposit(&chips);
    }
    assert_eq!(player.total() + pot.total(), before);
    assert!(pot.iter().all(|(d, _)| DENOMINATIONS.contains(&d)));
}

#[test]
fn overdraw_is_an_error_not_a_clamp() {
    let mut stack = ChipStack::from_counts([(25, 1)]);
    assert_eq!(
        stack.withdraw(26),
        Err(GameError::InsufficientChips {
            requested: 26,
            available: 25
        })
    );
    assert_eq!(stack.total(), 25);
}

#[test]
fn serializes_as_a_plain_denomination_map() {
    let stack = ChipStack::from_counts([(100, 2), (5, 1)]);
    let json = serde_json::to_string(&stack).unwrap();
    assert_eq!(json, r#"{"5":1,"100":2}"#);
    let back: ChipStack = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stack);
}
