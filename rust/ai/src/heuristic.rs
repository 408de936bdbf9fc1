//! Difficulty-tiered heuristic bot.
//!
//! Preflop play follows a decision table over hand category, stack depth and
//! whether the pot is already opened. Postflop play scores the hole cards and
//! weighs that against pot odds. Both regimes are randomized through the RNG
//! handed in by the table, so a seeded source replays the same decisions.

use rand::RngCore;
use railbird_engine::player::PlayerAction;
use railbird_engine::policy::BotPolicy;
use railbird_engine::table::{Difficulty, TableStage, TableState};

use crate::view::BotView;
use crate::{postflop, preflop};

/// The table's default opponent.
///
/// # Example
///
/// ```rust
/// use railbird_ai::heuristic::HeuristicBot;
/// use railbird_engine::policy::BotPolicy;
/// use railbird_engine::table::Difficulty;
///
/// let bot = HeuristicBot::with_difficulty(Difficulty::Hard);
/// assert_eq!(bot.name(), "heuristic");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeuristicBot {
    difficulty: Option<Difficulty>,
}

impl HeuristicBot {
    /// Plays at whatever difficulty the table was created with.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays at `difficulty` regardless of the table setting.
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty: Some(difficulty),
        }
    }
}

impl BotPolicy for HeuristicBot {
    fn decide(&self, state: &TableState, seat: usize, rng: &mut dyn RngCore) -> PlayerAction {
        if !state.players.get(seat).is_some_and(|p| p.can_act()) {
            return PlayerAction::Call;
        }
        let difficulty = self.difficulty.unwrap_or(state.difficulty);
        let view = BotView::new(state, seat, difficulty);
        match view.stage {
            TableStage::PreFlop => preflop::decide(&view, rng),
            TableStage::Flop | TableStage::Turn | TableStage::River => postflop::decide(&view, rng),
            TableStage::DealerDraw | TableStage::Showdown => PlayerAction::Call,
        }
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
