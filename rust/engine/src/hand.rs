use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Coarse preflop tiers used by the bot decision tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// QQ+, AK
    Premium,
    /// JJ, TT, AQ, AJ, KQ
    Good,
    /// 22–99 and suited cards within two ranks (high card five or better)
    Speculative,
    Trash,
}

/// Classifies a two-card starting hand.
///
/// Total over its input: anything other than two cards is [`HandCategory::Trash`].
///
/// ```
/// use railbird_engine::cards::{Card, Rank, Suit};
/// use railbird_engine::hand::{categorize_preflop_hand, HandCategory};
///
/// let aces = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Hearts)];
/// assert_eq!(categorize_preflop_hand(&aces), HandCategory::Premium);
///
/// let seven_deuce = [Card::new(Rank::Seven, Suit::Clubs), Card::new(Rank::Two, Suit::Diamonds)];
/// assert_eq!(categorize_preflop_hand(&seven_deuce), HandCategory::Trash);
/// ```
pub fn categorize_preflop_hand(cards: &[Card]) -> HandCategory {
    let [a, b] = match cards {
        [a, b] => [*a, *b],
        _ => return HandCategory::Trash,
    };
    let (high, low) = if a.rank >= b.rank {
        (a.rank, b.rank)
    } else {
        (b.rank, a.rank)
    };
    let suited = a.suit == b.suit;

    if high == low {
        return match high {
            Rank::Ace | Rank::King | Rank::Queen => HandCategory::Premium,
            Rank::Jack | Rank::Ten => HandCategory::Good,
            _ => HandCategory::Speculative,
        };
    }

    match (high, low) {
        (Rank::Ace, Rank::King) => HandCategory::Premium,
        (Rank::Ace, Rank::Queen) | (Rank::Ace, Rank::Jack) | (Rank::King, Rank::Queen) => {
            HandCategory::Good
        }
        _ if suited && high.value() - low.value() <= 2 && high >= Rank::Five => {
            HandCategory::Speculative
        }
        _ => HandCategory::Trash,
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Best five-card ranking out of 5–7 cards.
///
/// Fewer than five cards are ranked as far as they go (pairs, trips), which
/// keeps the function total for partial boards.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15];
    let mut by_suit: [u16; 4] = [0; 4];
    let mut suit_counts = [0u8; 4];
    let mut rank_mask: u16 = 0;
    for c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        let s = c.suit as usize;
        suit_counts[s] += 1;
        by_suit[s] |= 1u16 << r;
        rank_mask |= 1u16 << r;
    }

    let flush_suit = (0..4).find(|&s| suit_counts[s] >= 5);
    if let Some(s) = flush_suit {
        if let Some(high) = straight_high(by_suit[s]) {
            return strength(Category::StraightFlush, &[high]);
        }
    }

    let groups = grouped_ranks(&rank_counts);
    let of_size = |n: u8| groups.iter().filter(move |(c, _)| *c == n).map(|(_, r)| *r);

    if let Some(quad) = of_size(4).next() {
        return strength(Category::FourOfAKind, &led_by(&[quad], &rank_counts, 1));
    }

    let trips: Vec<u8> = of_size(3).collect();
    let pairs: Vec<u8> = of_size(2).collect();
    if let Some(&t) = trips.first() {
        let pair = trips.get(1).copied().into_iter().chain(pairs.first().copied()).max();
        if let Some(p) = pair {
            return strength(Category::FullHouse, &[t, p]);
        }
    }

    if let Some(s) = flush_suit {
        let ranks: Vec<u8> = (2..=14u8)
            .rev()
            .filter(|&r| by_suit[s] & (1u16 << r) != 0)
            .take(5)
            .collect();
        return strength(Category::Flush, &ranks);
    }

    if let Some(high) = straight_high(rank_mask) {
        return strength(Category::Straight, &[high]);
    }

    if let Some(&t) = trips.first() {
        return strength(Category::ThreeOfAKind, &led_by(&[t], &rank_counts, 2));
    }
    if pairs.len() >= 2 {
        return strength(Category::TwoPair, &led_by(&pairs[..2], &rank_counts, 1));
    }
    if let Some(&p) = pairs.first() {
        return strength(Category::OnePair, &led_by(&[p], &rank_counts, 3));
    }
    strength(Category::HighCard, &top_ranks(&rank_counts, &[], 5))
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn strength(category: Category, ranks: &[u8]) -> HandStrength {
    let mut kickers = [0u8; 5];
    for (slot, r) in kickers.iter_mut().zip(ranks) {
        *slot = *r;
    }
    HandStrength { category, kickers }
}

/// `lead` ranks followed by the best `n` kickers outside them.
fn led_by(lead: &[u8], rank_counts: &[u8; 15], n: usize) -> Vec<u8> {
    let mut ranks = lead.to_vec();
    ranks.extend(top_ranks(rank_counts, lead, n));
    ranks
}

/// (count, rank) groups, highest rank first.
fn grouped_ranks(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect()
}

fn top_ranks(rank_counts: &[u8; 15], exclude: &[u8], n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| rank_counts[*r as usize] > 0 && !exclude.contains(r))
        .take(n)
        .collect()
}

fn straight_high(mask: u16) -> Option<u8> {
    let mut m = mask;
    // ace plays low in the wheel
    if m & (1 << 14) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b11111u16 << (high - 4);
        m & window == window
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn pocket_pairs_split_across_tiers() {
        let pair = |r| [c(r, Suit::Spades), c(r, Suit::Hearts)];
        assert_eq!(categorize_preflop_hand(&pair(Rank::Queen)), HandCategory::Premium);
        assert_eq!(categorize_preflop_hand(&pair(Rank::Jack)), HandCategory::Good);
        assert_eq!(categorize_preflop_hand(&pair(Rank::Ten)), HandCategory::Good);
        assert_eq!(categorize_preflop_hand(&pair(Rank::Nine)), HandCategory::Speculative);
        assert_eq!(categorize_preflop_hand(&pair(Rank::Two)), HandCategory::Speculative);
    }

    #[test]
    fn broadway_combinations() {
        let aks = [c(Rank::Ace, Suit::Clubs), c(Rank::King, Suit::Clubs)];
        let ako = [c(Rank::King, Suit::Hearts), c(Rank::Ace, Suit::Clubs)];
        let kqo = [c(Rank::King, Suit::Hearts), c(Rank::Queen, Suit::Clubs)];
        let ajo = [c(Rank::Ace, Suit::Hearts), c(Rank::Jack, Suit::Clubs)];
        let ato = [c(Rank::Ace, Suit::Hearts), c(Rank::Ten, Suit::Clubs)];
        assert_eq!(categorize_preflop_hand(&aks), HandCategory::Premium);
        assert_eq!(categorize_preflop_hand(&ako), HandCategory::Premium);
        assert_eq!(categorize_preflop_hand(&kqo), HandCategory::Good);
        assert_eq!(categorize_preflop_hand(&ajo), HandCategory::Good);
        assert_eq!(categorize_preflop_hand(&ato), HandCategory::Trash);
    }

    #[test]
    fn suited_gappers_need_a_five_or_better() {
        let s = Suit::Diamonds;
        assert_eq!(
            categorize_preflop_hand(&[c(Rank::Nine, s), c(Rank::Seven, s)]),
            HandCategory::Speculative
        );
        assert_eq!(
            categorize_preflop_hand(&[c(Rank::Five, s), c(Rank::Three, s)]),
            HandCategory::Speculative
        );
        assert_eq!(
            categorize_preflop_hand(&[c(Rank::Three, s), c(Rank::Two, s)]),
            HandCategory::Trash
        );
        assert_eq!(
            categorize_preflop_hand(&[c(Rank::Nine, s), c(Rank::Six, s)]),
            HandCategory::Trash
        );
        assert_eq!(
            categorize_preflop_hand(&[c(Rank::Nine, s), c(Rank::Eight, Suit::Clubs)]),
            HandCategory::Trash
        );
    }

    #[test]
    fn malformed_input_is_trash() {
        assert_eq!(categorize_preflop_hand(&[]), HandCategory::Trash);
        assert_eq!(
            categorize_preflop_hand(&[c(Rank::Ace, Suit::Spades)]),
            HandCategory::Trash
        );
    }

    #[test]
    fn wheel_is_a_five_high_straight() {
        let cards = [
            c(Rank::Ace, Suit::Spades),
            c(Rank::Two, Suit::Hearts),
            c(Rank::Three, Suit::Clubs),
            c(Rank::Four, Suit::Diamonds),
            c(Rank::Five, Suit::Spades),
            c(Rank::King, Suit::Hearts),
            c(Rank::Nine, Suit::Clubs),
        ];
        let s = evaluate_hand(&cards);
        assert_eq!(s.category, Category::Straight);
        assert_eq!(s.kickers[0], 5);
    }

    #[test]
    fn full_house_beats_flush() {
        let boat = evaluate_hand(&[
            c(Rank::King, Suit::Spades),
            c(Rank::King, Suit::Hearts),
            c(Rank::King, Suit::Clubs),
            c(Rank::Four, Suit::Diamonds),
            c(Rank::Four, Suit::Spades),
        ]);
        let flush = evaluate_hand(&[
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Jack, Suit::Hearts),
            c(Rank::Eight, Suit::Hearts),
            c(Rank::Six, Suit::Hearts),
            c(Rank::Two, Suit::Hearts),
        ]);
        assert_eq!(boat.category, Category::FullHouse);
        assert_eq!(boat.kickers[..2], [13, 4]);
        assert_eq!(flush.category, Category::Flush);
        assert_eq!(compare_hands(&boat, &flush), Ordering::Greater);
    }

    #[test]
    fn two_pair_kicker_decides() {
        let board = [
            c(Rank::Queen, Suit::Spades),
            c(Rank::Queen, Suit::Hearts),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Seven, Suit::Diamonds),
            c(Rank::Two, Suit::Spades),
        ];
        let mut with_ace = board.to_vec();
        with_ace.extend([c(Rank::Ace, Suit::Clubs), c(Rank::Three, Suit::Clubs)]);
        let mut with_king = board.to_vec();
        with_king.extend([c(Rank::King, Suit::Clubs), c(Rank::Three, Suit::Hearts)]);
        let a = evaluate_hand(&with_ace);
        let k = evaluate_hand(&with_king);
        assert_eq!(a.category, Category::TwoPair);
        assert_eq!(compare_hands(&a, &k), Ordering::Greater);
    }
}
