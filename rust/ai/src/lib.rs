//! # railbird-ai: Scripted Opponents for the Trainer Table
//!
//! Bot decision making for `railbird-engine`. Every bot implements the
//! engine's [`BotPolicy`] seam, so the table can resolve a pending bot turn
//! without knowing which strategy sits in the seat.
//!
//! ## Core Components
//!
//! - [`heuristic`] - The difficulty-tiered opponent (Easy, Medium, Hard)
//! - [`passive`] - A check/call bot for simulations and tests
//! - [`create_ai`] - Factory for policies by name
//! - [`decide_and_apply_bot_action`] - One heuristic decision, applied
//!
//! ## Quick Start
//!
//! ```rust
//! use railbird_ai::create_ai;
//! use railbird_engine::deck::seeded_rng;
//! use railbird_engine::table::{create_initial_table, run_pending_bots, start_new_hand, TableConfig};
//!
//! let mut rng = seeded_rng(42);
//! let config = TableConfig { num_bots: 3, ..TableConfig::default() };
//! let table = create_initial_table(&config, &mut rng).unwrap();
//! let table = start_new_hand(table, &mut rng);
//!
//! let bot = create_ai("heuristic").unwrap();
//! let table = run_pending_bots(table, bot.as_ref(), &mut rng);
//! assert!(table.bot_pending_index.is_none());
//! ```

use rand::RngCore;
use railbird_engine::policy::BotPolicy;
use railbird_engine::table::{apply_bot_decision, TableState};

pub mod heuristic;
pub mod passive;
pub mod postflop;
pub mod preflop;
pub mod profile;
pub mod sizing;
pub mod view;

pub use heuristic::HeuristicBot;
pub use passive::PassiveBot;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 2] = ["heuristic", "passive"];

/// Builds a policy by name, or `None` for an unknown name.
///
/// ```rust
/// use railbird_ai::create_ai;
///
/// assert_eq!(create_ai("passive").unwrap().name(), "passive");
/// assert!(create_ai("solver").is_none());
/// ```
pub fn create_ai(name: &str) -> Option<Box<dyn BotPolicy>> {
    match name {
        "heuristic" => Some(Box::new(HeuristicBot::new())),
        "passive" => Some(Box::new(PassiveBot)),
        _ => None,
    }
}

/// Decides for bot `seat` with the table's difficulty and applies the result,
/// continuing the action loop until the next pending turn.
///
/// A seat that cannot act leaves the decision to the loop, which skips it.
pub fn decide_and_apply_bot_action(
    state: TableState,
    seat: usize,
    rng: &mut dyn RngCore,
) -> TableState {
    let bot = HeuristicBot::new();
    let action = bot.decide(&state, seat, rng);
    let mut state = state;
    if state.bot_pending_index == Some(seat) {
        state.bot_pending_index = None;
    }
    apply_bot_decision(state, seat, action)
}
