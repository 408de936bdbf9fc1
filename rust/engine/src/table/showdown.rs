use std::cmp::Ordering;

use super::state::{HandResult, ShowdownRule, TableStage, TableState};
use super::tips;
use crate::cards::{compare_high_card, format_cards, Card};
use crate::chips::ChipStack;
use crate::hand::{compare_hands, evaluate_hand};
use crate::logger::LogKind;

/// Hands the pot to the last player standing.
pub(crate) fn award_uncontested(state: TableState) -> TableState {
    let live: Vec<usize> = live_seats(&state);
    let winner = match live.as_slice() {
        [w] => *w,
        _ => {
            // every seat folded; the pot goes back to the button
            tracing::warn!(live = live.len(), "uncontested award without a single survivor");
            state.dealer_index.unwrap_or(0)
        }
    };
    award(state, vec![winner], "everyone else folded".to_string())
}

/// Settles a hand that went to the river among the players still in.
pub(crate) fn resolve_showdown(mut state: TableState) -> TableState {
    let contenders = live_seats(&state);
    if contenders.len() <= 1 {
        return award_uncontested(state);
    }
    tips::best_hand_readout(&mut state);

    match state.showdown_rule {
        ShowdownRule::HighCard => {
            let mut best: Option<(usize, Vec<Card>)> = None;
            for &seat in &contenders {
                let cards = high_cards(&state, seat);
                let better = match &best {
                    Some((_, top)) => compare_card_lists(&cards, top).is_gt(),
                    None => true,
                };
                if better {
                    best = Some((seat, cards));
                }
            }
            let Some((winner, cards)) = best else {
                return state;
            };
            let reason = match cards.first() {
                Some(top) => format!("high card {}", top),
                None => "high card".to_string(),
            };
            award(state, vec![winner], reason)
        }
        ShowdownRule::BestHand => {
            let ranked: Vec<(usize, _)> = contenders
                .iter()
                .map(|&seat| {
                    let mut cards = state.players[seat].hole_cards.clone();
                    cards.extend_from_slice(&state.board);
                    (seat, evaluate_hand(&cards))
                })
                .collect();
            let Some(top) = ranked
                .iter()
                .map(|(_, s)| s)
                .max_by(|a, b| compare_hands(a, b))
                .cloned()
            else {
                return state;
            };
            let winners: Vec<usize> = ranked
                .iter()
                .filter(|(_, s)| compare_hands(s, &top) == Ordering::Equal)
                .map(|(seat, _)| *seat)
                .collect();
            let reason = top.category.to_string();
            award(state, winners, reason)
        }
    }
}

fn live_seats(state: &TableState) -> Vec<usize> {
    (0..state.players.len())
        .filter(|&i| state.players[i].is_live())
        .collect()
}

/// Hole cards and board, best first.
fn high_cards(state: &TableState, seat: usize) -> Vec<Card> {
    let mut cards = state.players[seat].hole_cards.clone();
    cards.extend_from_slice(&state.board);
    cards.sort_by(|a, b| compare_high_card(b, a));
    cards
}

fn compare_card_lists(a: &[Card], b: &[Card]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match compare_high_card(x, y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Splits the pot between `winners`; the odd chip goes to the first winner
/// left of the button. Ends the hand.
fn award(mut state: TableState, mut winners: Vec<usize>, reason: String) -> TableState {
    let n = state.players.len();
    let button = state.dealer_index.unwrap_or(0);
    winners.sort_by_key(|&w| (w + n - button - 1) % n);
    winners.dedup();

    let amount = state.pot;
    let share = amount / winners.len() as u32;
    let odd = amount % winners.len() as u32;
    let mut pot_stack = std::mem::take(&mut state.pot_stack);

    for (k, &seat) in winners.iter().enumerate() {
        let won = if k == 0 { share + odd } else { share };
        let chips = pot_stack
            .withdraw(won)
            .unwrap_or_else(|_| ChipStack::from_amount(won));
        state.players[seat].collect(won, &chips);
    }

    state.pot = 0;
    for p in state.players.iter_mut() {
        p.bet = 0;
    }
    state.current_bet = 0;
    state.stage = TableStage::Showdown;
    state.current_player_index = None;
    state.bot_pending_index = None;

    let names: Vec<String> = winners
        .iter()
        .map(|&w| state.players[w].name.clone())
        .collect();
    let mut msg = format!("{} won {} ({})", names.join(" and "), amount, reason);
    if !state.board.is_empty() {
        msg.push_str(&format!(" on {}", format_cards(&state.board)));
    }
    tracing::info!(
        hand = state.hand_number,
        winners = ?winners,
        amount,
        reason = %reason,
        "pot awarded"
    );
    state.log(LogKind::Result, msg);
    state.last_result = Some(HandResult {
        hand_number: state.hand_number,
        winners,
        amount,
        reason,
    });
    state
}
