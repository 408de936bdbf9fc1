use rand::RngCore;

use super::flow::process_next_action;
use super::state::{get_hero_index, max_bet, TableState};
use super::tips;
use crate::errors::GameError;
use crate::player::{ActionOutcome, PlayerAction};
use crate::policy::BotPolicy;
use crate::rules::validate_action;

/// Settles `action` for `seat` against the highest bet, moves the chips and
/// hands the turn to the next seat. Does not run the action loop.
///
/// Payments are clamped to the stack; emptying it is reported as
/// [`ActionOutcome::AllIn`] whatever was asked for.
pub(crate) fn apply_action(mut state: TableState, seat: usize, action: PlayerAction) -> TableState {
    let highest = max_bet(&state);
    let (bet, chips) = {
        let p = &state.players[seat];
        (p.bet, p.chips)
    };
    let owed = highest.saturating_sub(bet);

    let pay = match action {
        PlayerAction::Fold => None,
        PlayerAction::Call => Some(owed.min(chips)),
        PlayerAction::RaiseTo(target) if target <= highest => Some(owed.min(chips)),
        PlayerAction::RaiseTo(target) => Some((target - bet).min(chips)),
        PlayerAction::AllIn => Some(chips),
    };

    let outcome = match pay {
        None => {
            state.players[seat].has_folded = true;
            ActionOutcome::Folded
        }
        Some(0) => ActionOutcome::Checked,
        Some(amount) => {
            let paid = state.move_to_pot(seat, amount);
            let p = &state.players[seat];
            if p.chips == 0 {
                ActionOutcome::AllIn {
                    paid,
                    total_bet: p.bet,
                }
            } else if p.bet > highest {
                ActionOutcome::RaisedTo(p.bet)
            } else {
                ActionOutcome::Called(paid)
            }
        }
    };

    let new_bet = state.players[seat].bet;
    if new_bet > highest {
        for (i, p) in state.players.iter_mut().enumerate() {
            if i != seat && p.can_act() {
                p.has_acted = false;
            }
        }
    }
    state.current_bet = max_bet(&state);

    let player = &mut state.players[seat];
    player.has_acted = true;
    player.last_action = Some(outcome);
    let msg = describe(&player.name, outcome);
    tracing::debug!(seat, outcome = ?outcome, stage = %state.stage, "action");
    state.log_seat(seat, Some(outcome), msg);
    tips::tip_action(&mut state, seat, outcome, new_bet > highest);

    let n = state.players.len();
    state.current_player_index = Some((seat + 1) % n);
    state
}

fn describe(name: &str, outcome: ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Blind { amount, .. } => format!("{} posted {}", name, amount),
        ActionOutcome::Folded => format!("{} folded", name),
        ActionOutcome::Checked => format!("{} checked", name),
        ActionOutcome::Called(paid) => format!("{} called {}", name, paid),
        ActionOutcome::RaisedTo(total) => format!("{} raised to {}", name, total),
        ActionOutcome::AllIn { total_bet, .. } => format!("{} went all-in for {}", name, total_bet),
    }
}

fn hero_act(state: TableState, action: PlayerAction) -> TableState {
    let Some(hero) = get_hero_index(&state) else {
        return state;
    };
    if !state.stage.is_betting() || !state.players[hero].can_act() {
        tracing::warn!(stage = %state.stage, action = ?action, "hero action ignored");
        return state;
    }
    process_next_action(apply_action(state, hero, action))
}

/// Hero folds. Returns the state unchanged when no hero is seated.
pub fn hero_fold(state: TableState) -> TableState {
    hero_act(state, PlayerAction::Fold)
}

/// Hero calls the highest bet, or checks when nothing is owed.
pub fn hero_call(state: TableState) -> TableState {
    hero_act(state, PlayerAction::Call)
}

/// Hero raises so this street's total bet becomes `target`.
///
/// The payment is capped by the stack. A target at or below the highest bet
/// is treated as a call.
pub fn hero_raise_to(state: TableState, target: u32) -> TableState {
    hero_act(state, PlayerAction::RaiseTo(target))
}

pub fn hero_all_in(state: TableState) -> TableState {
    hero_act(state, PlayerAction::AllIn)
}

/// Validated hero action for callers that want to surface mistakes.
///
/// # Errors
///
/// - [`GameError::NoHeroSeated`] without a hero
/// - [`GameError::NoHandInProgress`] outside a betting street
/// - [`GameError::PlayerAlreadyFolded`] once the hero has folded
/// - [`GameError::NotPlayersTurn`] when the turn is parked elsewhere
/// - [`GameError::InvalidBetAmount`] for a raise below the minimum that is
///   not all-in
pub fn try_hero_action(state: TableState, action: PlayerAction) -> Result<TableState, GameError> {
    let hero = get_hero_index(&state).ok_or(GameError::NoHeroSeated)?;
    if !state.stage.is_betting() {
        return Err(GameError::NoHandInProgress);
    }
    if state.players[hero].has_folded {
        return Err(GameError::PlayerAlreadyFolded);
    }
    if state.current_player_index != Some(hero) || state.bot_pending_index.is_some() {
        return Err(GameError::NotPlayersTurn {
            expected: state.current_player_index,
            actual: hero,
        });
    }
    let action = validate_action(&state, hero, action)?;
    Ok(process_next_action(apply_action(state, hero, action)))
}

/// Applies a decision made for bot `seat` and continues the action loop.
///
/// A raise that cannot go above the highest bet falls back to a call.
pub fn apply_bot_decision(state: TableState, seat: usize, action: PlayerAction) -> TableState {
    if seat >= state.players.len()
        || !state.stage.is_betting()
        || !state.players[seat].can_act()
    {
        tracing::warn!(seat, "bot decision for a seat that cannot act");
        return process_next_action(state);
    }
    let p = &state.players[seat];
    let action = match action {
        PlayerAction::RaiseTo(target) if target <= max_bet(&state) || target <= p.bet => {
            PlayerAction::Call
        }
        other => other,
    };
    process_next_action(apply_action(state, seat, action))
}

/// Resolves the pending bot turn with `policy`, then continues the chain.
/// No-op when no bot is pending.
pub fn perform_bot_action_now(
    mut state: TableState,
    policy: &dyn BotPolicy,
    rng: &mut dyn RngCore,
) -> TableState {
    let Some(seat) = state.bot_pending_index.take() else {
        return state;
    };
    if !state.stage.is_betting() || !state.players.get(seat).is_some_and(|p| p.can_act()) {
        return process_next_action(state);
    }
    let action = policy.decide(&state, seat, rng);
    tracing::debug!(seat, bot = policy.name(), action = ?action, "bot decided");
    apply_bot_decision(state, seat, action)
}

/// Resolves bot turns until the hero must act or the hand is over.
pub fn run_pending_bots(
    mut state: TableState,
    policy: &dyn BotPolicy,
    rng: &mut dyn RngCore,
) -> TableState {
    while state.bot_pending_index.is_some() {
        state = perform_bot_action_now(state, policy, rng);
    }
    state
}
