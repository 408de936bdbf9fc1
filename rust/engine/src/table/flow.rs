use super::showdown::{award_uncontested, resolve_showdown};
use super::state::{active_player_count, max_bet, TableStage, TableState};
use super::tips;
use crate::cards::format_cards;
use crate::logger::LogKind;

/// A seat that can act and still owes a decision on this street.
fn needs_to_act(state: &TableState, seat: usize, highest: u32) -> bool {
    let p = &state.players[seat];
    p.can_act() && (!p.has_acted || p.bet < highest)
}

/// The street is over when nobody who can still act owes a decision.
///
/// A lone player with chips behind only has to match the highest bet; with
/// nobody left to respond there is nothing else to decide.
pub fn betting_round_closed(state: &TableState) -> bool {
    let highest = max_bet(state);
    let actors: Vec<usize> = (0..state.players.len())
        .filter(|&i| state.players[i].can_act())
        .collect();
    match actors.as_slice() {
        [] => true,
        [only] => state.players[*only].bet >= highest,
        _ => actors.iter().all(|&i| !needs_to_act(state, i, highest)),
    }
}

/// Drives the hand forward until input is needed.
///
/// Ends the hand when at most one player is left, deals the next street when
/// the round has closed, and otherwise parks the turn on the next seat that
/// must act, scanning from `current_player_index` inclusive. A bot's turn is
/// flagged in `bot_pending_index` and left for the caller to resolve.
pub fn process_next_action(mut state: TableState) -> TableState {
    state.bot_pending_index = None;
    loop {
        if !state.stage.is_betting() {
            state.current_player_index = None;
            return state;
        }
        if active_player_count(&state) <= 1 {
            return award_uncontested(state);
        }
        if betting_round_closed(&state) {
            state = advance_to_next_street(state);
            continue;
        }

        let n = state.players.len();
        let highest = max_bet(&state);
        let start = state.current_player_index.unwrap_or(0) % n;
        let next = (0..n)
            .map(|k| (start + k) % n)
            .find(|&i| needs_to_act(&state, i, highest));
        let Some(seat) = next else {
            state = advance_to_next_street(state);
            continue;
        };

        state.current_player_index = Some(seat);
        if state.players[seat].is_bot() {
            state.bot_pending_index = Some(seat);
        }
        tracing::debug!(seat, stage = %state.stage, "turn");
        return state;
    }
}

/// Closes the current street: clears bets, burns and deals the next board
/// cards, or settles the hand after the river.
///
/// The next actor is the first seat after the button that can act.
pub fn advance_to_next_street(mut state: TableState) -> TableState {
    for p in state.players.iter_mut() {
        p.bet = 0;
        p.has_acted = false;
    }
    state.current_bet = 0;

    let (next, count) = match state.stage {
        TableStage::PreFlop => (TableStage::Flop, 3),
        TableStage::Flop => (TableStage::Turn, 1),
        TableStage::Turn => (TableStage::River, 1),
        TableStage::River => {
            state.stage = TableStage::Showdown;
            return resolve_showdown(state);
        }
        TableStage::DealerDraw | TableStage::Showdown => return state,
    };

    if let Some(card) = state.draw_card() {
        state.burned.push(card);
    }
    for _ in 0..count {
        if let Some(card) = state.draw_card() {
            state.board.push(card);
        }
    }
    state.stage = next;
    let msg = format!("{}: {}", next, format_cards(&state.board));
    state.log(LogKind::Deal, msg);
    tips::tip_street(&mut state);
    tracing::debug!(stage = %next, board = %format_cards(&state.board), "street dealt");

    let from = state.dealer_index.unwrap_or(0);
    state.current_player_index = state.next_seat_where(from, |p| p.can_act());
    state
}
