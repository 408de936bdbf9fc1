use rand::RngCore;

use super::flow::process_next_action;
use super::setup::{blind_seats, perform_dealer_draw, reveal_dealer_draw};
use super::state::{max_bet, TableStage, TableState};
use super::tips;
use crate::cards::Card;
use crate::deck::shuffled_deck;
use crate::logger::LogKind;
use crate::player::ActionOutcome;

/// Starts the next hand: moves the button, reshuffles, posts blinds, deals two
/// cards to every seat with chips and runs the action loop until someone
/// needs input.
///
/// Refused, with a log line, while a hand is still being played or when fewer
/// than two seats have chips. The first hand keeps the button chosen by the
/// dealer draw; a table that never drew gets an implicit draw.
pub fn start_new_hand(mut state: TableState, rng: &mut dyn RngCore) -> TableState {
    if state.stage.is_betting() {
        tracing::warn!(hand = state.hand_number, "new hand refused: hand in progress");
        let msg = format!("Hand #{} is still in progress", state.hand_number);
        state.log(LogKind::Info, msg);
        return state;
    }
    let funded = state.players.iter().filter(|p| p.chips > 0).count();
    if funded < 2 {
        tracing::warn!(funded, "new hand refused: not enough players with chips");
        state.log(LogKind::Info, "Not enough players with chips to deal a hand");
        return state;
    }

    let dealer = match state.dealer_index {
        None => {
            state = reveal_dealer_draw(perform_dealer_draw(state, rng));
            state.dealer_index
        }
        Some(d) if state.hand_number == 0 && state.players[d].chips > 0 => Some(d),
        Some(d) => state.next_seat_where(d, |p| p.chips > 0),
    };
    let Some(dealer) = dealer else {
        tracing::warn!("no seat can take the button");
        return state;
    };

    state.dealer_index = Some(dealer);
    state.hand_number += 1;
    state.stage = TableStage::PreFlop;
    state.deck = shuffled_deck(rng);
    state.burned.clear();
    state.board.clear();
    state.current_bet = 0;
    state.bot_pending_index = None;
    state.last_result = None;
    state.dealer_draw_in_progress = false;
    for p in state.players.iter_mut() {
        p.reset_for_hand();
    }

    let msg = format!(
        "New hand #{} (button: {})",
        state.hand_number, state.players[dealer].name
    );
    state.log(LogKind::Info, msg);
    tracing::info!(hand = state.hand_number, dealer, "new hand");

    let (sb, bb) = blind_seats(&state, dealer);
    state.small_blind_index = sb;
    state.big_blind_index = bb;
    post_blinds(&mut state);
    deal_hole_cards(&mut state);
    tips::tip_hole_cards(&mut state);

    let n = state.players.len();
    state.current_player_index = bb.or(sb).map(|b| (b + 1) % n);
    process_next_action(state)
}

fn post_blinds(state: &mut TableState) {
    let posts = [
        (state.small_blind_index, state.small_blind, "small blind"),
        (state.big_blind_index, state.big_blind, "big blind"),
    ];
    for (seat, amount, label) in posts {
        let Some(seat) = seat else { continue };
        let paid = state.move_to_pot(seat, amount);
        let player = &mut state.players[seat];
        let all_in = player.is_all_in;
        let outcome = ActionOutcome::Blind { amount: paid, all_in };
        player.last_action = Some(outcome);
        let mut msg = format!("{} posted {} {}", player.name, label, paid);
        if all_in {
            msg.push_str(" and is all-in");
        }
        state.log_seat(seat, Some(outcome), msg);
    }
    state.current_bet = max_bet(state);
}

/// One card at a time, two rounds, starting at the small blind. Seats sitting
/// out get nothing.
fn deal_hole_cards(state: &mut TableState) {
    let n = state.players.len();
    let start = state
        .small_blind_index
        .or(state.dealer_index.map(|d| (d + 1) % n))
        .unwrap_or(0);
    for _ in 0..2 {
        for k in 0..n {
            let seat = (start + k) % n;
            if state.players[seat].has_folded {
                continue;
            }
            if let Some(card) = state.draw_card() {
                state.players[seat].hole_cards.push(card);
            }
        }
    }
    state.log(LogKind::Deal, "Hole cards dealt");
}

impl TableState {
    /// Pops the next card, logging instead of failing when the deck is empty.
    pub(crate) fn draw_card(&mut self) -> Option<Card> {
        let card = self.deck.pop();
        if card.is_none() {
            tracing::warn!(hand = self.hand_number, stage = %self.stage, "deck exhausted");
            self.log(LogKind::Info, "Deck exhausted; card skipped");
        }
        card
    }

    /// Commits up to `amount` from `seat` into the pot and returns what was paid.
    pub(crate) fn move_to_pot(&mut self, seat: usize, amount: u32) -> u32 {
        let player = &mut self.players[seat];
        let paid = amount.min(player.chips);
        let chips = player.commit(paid);
        self.pot = self.pot.saturating_add(paid);
        self.pot_stack.deposit(&chips);
        paid
    }
}
