//! Coaching lines for the hero.
//!
//! The table writes a [`LogKind::Tip`] entry tagged with the hero's seat when
//! hole cards are dealt, on every new street, after the hero folds or raises,
//! and with a best-hand readout at showdown. Seats sitting out get nothing.

use super::state::{get_hero_index, TableStage, TableState};
use crate::cards::{Card, Rank};
use crate::hand::{evaluate_hand, Category};
use crate::logger::LogKind;
use crate::player::ActionOutcome;

/// Advice for a two-card starting hand.
pub(crate) fn hole_card_tip(cards: &[Card]) -> Option<&'static str> {
    let [a, b] = match cards {
        [a, b] => [*a, *b],
        _ => return None,
    };
    let high = a.rank.max(b.rank);
    let low = a.rank.min(b.rank);

    let tip = if high == low {
        match high {
            r if r >= Rank::Jack => "Tip: premium pair. Consider raising.",
            r if r >= Rank::Eight => "Tip: good middle pair. You can play it aggressively.",
            _ => "Tip: small pair. Play carefully, especially out of position.",
        }
    } else if a.suit == b.suit {
        if high >= Rank::Jack {
            "Tip: suited with a high card. A good hand to see a flop with."
        } else {
            "Tip: suited but low. Play with caution."
        }
    } else if high >= Rank::King && low >= Rank::Ten {
        "Tip: two high cards. Play aggressively."
    } else if high >= Rank::Queen {
        "Tip: one high card. Consider seeing the flop."
    } else {
        "Tip: marginal hand. Weigh your position before playing."
    };
    Some(tip)
}

fn has_flush_draw(cards: &[Card]) -> bool {
    let mut counts = [0u8; 4];
    for c in cards {
        counts[c.suit as usize] += 1;
    }
    counts.contains(&4)
}

/// Four consecutive ranks, the ace also counting low.
fn has_straight_draw(cards: &[Card]) -> bool {
    let mut mask: u16 = 0;
    for c in cards {
        mask |= 1 << c.rank.value();
        if c.rank == Rank::Ace {
            mask |= 1 << 1;
        }
    }
    (1..=11).any(|low| (mask >> low) & 0b1111 == 0b1111)
}

/// Advice once the board has at least three cards. Draws are only mentioned
/// while cards are still to come.
pub(crate) fn street_tip(stage: TableStage, hole: &[Card], board: &[Card]) -> Option<String> {
    if hole.len() != 2 || board.len() < 3 {
        return None;
    }
    let cards: Vec<Card> = hole.iter().chain(board).copied().collect();
    let made = evaluate_hand(&cards).category;
    let drawing = stage != TableStage::River;

    let tip = match made {
        Category::Straight
        | Category::Flush
        | Category::FullHouse
        | Category::FourOfAKind
        | Category::StraightFlush => format!("Tip: you have a {}. Bet for value.", made),
        Category::ThreeOfAKind => "Tip: three of a kind. Very strong, play aggressively.".into(),
        _ if drawing && has_flush_draw(&cards) => {
            "Tip: four to a flush. Weigh the price against your outs.".into()
        }
        _ if drawing && has_straight_draw(&cards) => {
            "Tip: four to a straight. A strong draw when the price is right.".into()
        }
        Category::TwoPair => "Tip: two pair. Strong, but watch the board.".into(),
        Category::OnePair => "Tip: you have a pair. Judge whether it is strong enough.".into(),
        Category::HighCard if drawing => {
            "Tip: nothing yet. Check when you can and let big bets go.".into()
        }
        Category::HighCard => "Tip: no pair by the river. Time to make your best play.".into(),
    };
    Some(tip)
}

/// Advice after the hero folds or raises.
pub(crate) fn action_tip(outcome: ActionOutcome, raised: bool) -> Option<&'static str> {
    match outcome {
        ActionOutcome::Folded => {
            Some("Tip: sometimes folding is the best play. There are more hands.")
        }
        _ if raised => Some("Tip: raising can win the pot right away."),
        _ => None,
    }
}

/// Category of the best five cards out of hole and board, once the board is
/// complete.
pub(crate) fn best_hand(hole: &[Card], board: &[Card]) -> Option<Category> {
    if hole.len() != 2 || board.len() < 5 {
        return None;
    }
    let cards: Vec<Card> = hole.iter().chain(board).copied().collect();
    Some(evaluate_hand(&cards).category)
}

/// The hero's seat when it is still in the hand with cards.
fn live_hero(state: &TableState) -> Option<usize> {
    get_hero_index(state).filter(|&h| {
        let p = &state.players[h];
        !p.has_folded && p.hole_cards.len() == 2
    })
}

fn push_tip(state: &mut TableState, hero: usize, message: String) {
    state.push_log(LogKind::Tip, Some(hero), None, message);
}

pub(crate) fn tip_hole_cards(state: &mut TableState) {
    let Some(hero) = live_hero(state) else { return };
    if let Some(tip) = hole_card_tip(&state.players[hero].hole_cards) {
        push_tip(state, hero, tip.to_string());
    }
}

pub(crate) fn tip_street(state: &mut TableState) {
    let Some(hero) = live_hero(state) else { return };
    if let Some(tip) = street_tip(state.stage, &state.players[hero].hole_cards, &state.board) {
        push_tip(state, hero, tip);
    }
}

pub(crate) fn tip_action(state: &mut TableState, seat: usize, outcome: ActionOutcome, raised: bool) {
    if get_hero_index(state) != Some(seat) {
        return;
    }
    if let Some(tip) = action_tip(outcome, raised) {
        push_tip(state, seat, tip.to_string());
    }
}

pub(crate) fn best_hand_readout(state: &mut TableState) {
    let Some(hero) = live_hero(state) else { return };
    if let Some(category) = best_hand(&state.players[hero].hole_cards, &state.board) {
        push_tip(state, hero, format!("Your best hand: {}", category));
    }
}
