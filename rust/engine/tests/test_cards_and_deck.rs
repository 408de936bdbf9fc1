use std::cmp::Ordering;
use std::collections::HashSet;

use railbird_engine::cards::{compare_high_card, Card, Rank, Suit};
use railbird_engine::deck::{create_standard_deck, seeded_rng, shuffle_deck, shuffled_deck, DECK_SIZE};

#[test]
fn standard_deck_is_52_unique_cards() {
    let deck = create_standard_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation_and_leaves_input_alone() {
    let deck = create_standard_deck();
    let mut rng = seeded_rng(99);
    let shuffled = shuffle_deck(&deck, &mut rng);
    assert_eq!(deck, create_standard_deck());
    assert_ne!(shuffled, deck);

    let mut a = shuffled.clone();
    let mut b = deck.clone();
    a.sort_by(compare_high_card);
    b.sort_by(compare_high_card);
    assert_eq!(a, b);
}

#[test]
fn seeded_shuffles_replay_and_differ_by_seed() {
    assert_eq!(shuffled_deck(&mut seeded_rng(1)), shuffled_deck(&mut seeded_rng(1)));
    assert_ne!(shuffled_deck(&mut seeded_rng(1)), shuffled_deck(&mut seeded_rng(2)));
}

#[test]
fn high_card_order_is_rank_then_suit() {
    let ks = Card::new(Rank::King, Suit::Spades);
    let kh = Card::new(Rank::King, Suit::Hearts);
    let ac = Card::new(Rank::Ace, Suit::Clubs);
    let td = Card::new(Rank::Ten, Suit::Diamonds);
    let tc = Card::new(Rank::Ten, Suit::Clubs);

    assert_eq!(compare_high_card(&ks, &kh), Ordering::Greater);
    assert_eq!(compare_high_card(&ac, &ks), Ordering::Greater);
    assert_eq!(compare_high_card(&td, &tc), Ordering::Greater);
    assert_eq!(compare_high_card(&tc, &tc), Ordering::Equal);
}

#[test]
fn cards_render_with_suit_symbols() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "T♥");
}
