use railbird_engine::cards::{Card, Rank, Suit};
use railbird_engine::hand::{categorize_preflop_hand, compare_hands, evaluate_hand, Category, HandCategory};

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn category(a: Card, b: Card) -> HandCategory {
    categorize_preflop_hand(&[a, b])
}

#[test]
fn premium_hands() {
    use Rank::*;
    use Suit::*;
    assert_eq!(category(c(Ace, Spades), c(Ace, Hearts)), HandCategory::Premium);
    assert_eq!(category(c(Queen, Clubs), c(Queen, Diamonds)), HandCategory::Premium);
    assert_eq!(category(c(King, Clubs), c(Ace, Diamonds)), HandCategory::Premium);
    assert_eq!(category(c(Ace, Hearts), c(King, Hearts)), HandCategory::Premium);
}

#[test]
fn good_hands() {
    use Rank::*;
    use Suit::*;
    assert_eq!(category(c(Jack, Spades), c(Jack, Hearts)), HandCategory::Good);
    assert_eq!(category(c(Ten, Spades), c(Ten, Clubs)), HandCategory::Good);
    assert_eq!(category(c(Ace, Spades), c(Queen, Hearts)), HandCategory::Good);
    assert_eq!(category(c(Jack, Clubs), c(Ace, Clubs)), HandCategory::Good);
    assert_eq!(category(c(King, Spades), c(Queen, Diamonds)), HandCategory::Good);
}

#[test]
fn speculative_hands() {
    use Rank::*;
    use Suit::*;
    assert_eq!(category(c(Six, Spades), c(Six, Hearts)), HandCategory::Speculative);
    assert_eq!(category(c(Two, Spades), c(Two, Hearts)), HandCategory::Speculative);
    assert_eq!(category(c(Nine, Hearts), c(Eight, Hearts)), HandCategory::Speculative);
    assert_eq!(category(c(Five, Clubs), c(Three, Clubs)), HandCategory::Speculative);
}

#[test]
fn trash_hands() {
    use Rank::*;
    use Suit::*;
    assert_eq!(category(c(Seven, Clubs), c(Two, Diamonds)), HandCategory::Trash);
    assert_eq!(category(c(Three, Spades), c(Two, Spades)), HandCategory::Trash);
    assert_eq!(category(c(Nine, Hearts), c(Six, Hearts)), HandCategory::Trash);
    assert_eq!(category(c(Nine, Hearts), c(Eight, Clubs)), HandCategory::Trash);
    assert_eq!(categorize_preflop_hand(&[c(Ace, Spades)]), HandCategory::Trash);
    assert_eq!(categorize_preflop_hand(&[]), HandCategory::Trash);
}

#[test]
fn seven_card_ranking_orders_made_hands() {
    use Rank::*;
    use Suit::*;
    let board = [c(Two, Hearts), c(Seven, Hearts), c(Nine, Hearts), c(King, Clubs), c(King, Diamonds)];
    let with = |a: Card, b: Card| {
        let mut cards = board.to_vec();
        cards.extend([a, b]);
        evaluate_hand(&cards)
    };

    let flush = with(c(Ace, Hearts), c(Three, Hearts));
    let boat = with(c(Nine, Clubs), c(Nine, Diamonds));
    let two_pair = with(c(Seven, Clubs), c(Four, Spades));
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(boat.category, Category::FullHouse);
    assert_eq!(two_pair.category, Category::TwoPair);
    assert!(compare_hands(&boat, &flush).is_gt());
    assert!(compare_hands(&flush, &two_pair).is_gt());
}

#[test]
fn wheel_is_a_five_high_straight() {
    use Rank::*;
    use Suit::*;
    let cards = [c(Ace, Spades), c(Two, Hearts), c(Three, Clubs), c(Four, Diamonds), c(Five, Spades), c(King, Hearts), c(Queen, Clubs)];
    let s = evaluate_hand(&cards);
    assert_eq!(s.category, Category::Straight);
    assert_eq!(s.kickers[0], 5);
}
