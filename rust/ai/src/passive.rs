use rand::RngCore;
use railbird_engine::player::PlayerAction;
use railbird_engine::policy::BotPolicy;
use railbird_engine::table::TableState;

/// Checks or calls every decision. Used as a stand-in hero for simulations
/// and as a predictable opponent in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveBot;

impl BotPolicy for PassiveBot {
    fn decide(&self, _state: &TableState, _seat: usize, _rng: &mut dyn RngCore) -> PlayerAction {
        PlayerAction::Call
    }

    fn name(&self) -> &str {
        "passive"
    }
}
