use rand::RngCore;

use crate::player::PlayerAction;
use crate::table::TableState;

/// Decides what a bot seat does when its turn comes up.
///
/// The engine calls this from [`perform_bot_action_now`] with the state as it
/// stands at the bot's turn; the returned action goes through the same
/// clamping as hero input.
///
/// [`perform_bot_action_now`]: crate::table::perform_bot_action_now
pub trait BotPolicy {
    fn decide(&self, state: &TableState, seat: usize, rng: &mut dyn RngCore) -> PlayerAction;

    fn name(&self) -> &str;
}
