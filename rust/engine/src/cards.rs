use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
///
/// Variants are declared in ascending tie-break priority, so the derived
/// ordering already ranks spades > hearts > diamonds > clubs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and categorization purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn is_broadway(self) -> bool {
        self >= Rank::Ten
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A single playing card. Cards are plain values: copying one never aliases
/// another, and each of the 52 combinations exists at most once per hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(r, s));
        }
    }
    v
}

/// Orders two single cards by rank, then by suit priority
/// (spades > hearts > diamonds > clubs).
///
/// This is a total order over the 52 cards: two distinct cards never compare
/// equal. It settles the dealer draw and the high-card showdown.
///
/// ```
/// use railbird_engine::cards::{compare_high_card, Card, Rank, Suit};
/// use std::cmp::Ordering;
///
/// let ks = Card::new(Rank::King, Suit::Spades);
/// let kh = Card::new(Rank::King, Suit::Hearts);
/// assert_eq!(compare_high_card(&ks, &kh), Ordering::Greater);
/// ```
pub fn compare_high_card(a: &Card, b: &Card) -> Ordering {
    a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit))
}

/// Formats a run of cards separated by spaces, e.g. `A♠ K♦ 7♣`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_card_orders_rank_before_suit() {
        let two_spades = Card::new(Rank::Two, Suit::Spades);
        let three_clubs = Card::new(Rank::Three, Suit::Clubs);
        assert_eq!(
            compare_high_card(&three_clubs, &two_spades),
            Ordering::Greater
        );
    }

    #[test]
    fn suit_priority_breaks_rank_ties() {
        let rank = Rank::Queen;
        let order = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
        for pair in order.windows(2) {
            let lo = Card::new(rank, pair[0]);
            let hi = Card::new(rank, pair[1]);
            assert_eq!(compare_high_card(&hi, &lo), Ordering::Greater);
        }
    }

    #[test]
    fn display_uses_rank_letter_and_suit_symbol() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "T♥");
        assert_eq!(
            format_cards(&[
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::King, Suit::Diamonds)
            ]),
            "2♣ K♦"
        );
    }
}
