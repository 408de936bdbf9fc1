//! The table state machine.
//!
//! Every transition takes a [`TableState`] by value and returns its
//! successor. Transitions never panic on a well-formed state: refused or
//! degraded paths leave the state as it was and say so in the action log.

mod actions;
mod dealing;
mod flow;
mod setup;
mod showdown;
mod state;
mod tips;

pub use actions::{
    apply_bot_decision, hero_all_in, hero_call, hero_fold, hero_raise_to, perform_bot_action_now,
    run_pending_bots, try_hero_action,
};
pub use dealing::start_new_hand;
pub use flow::{advance_to_next_street, betting_round_closed, process_next_action};
pub use setup::{clear_action_log, create_initial_table, perform_dealer_draw, reveal_dealer_draw};
pub use state::{
    active_player_count, check_invariants, get_hero_index, is_game_over, max_bet, to_call,
    DealingState, Difficulty, HandResult, ShowdownRule, TableConfig, TableStage, TableState,
    MAX_BOTS,
};
