use railbird_engine::player::PlayerAction;

use crate::view::BotView;

/// Turns a raise target into a legal action.
///
/// Targets are clamped to `[min_raise_to, max_raise_to]`. A stack that cannot
/// fund a full minimum raise goes all-in instead, or just calls when
/// `may_shove` is off.
pub fn raise_to(view: &BotView, target: u32, may_shove: bool) -> PlayerAction {
    if view.max_raise_to < view.min_raise_to {
        return if may_shove && view.max_raise_to > view.highest_bet {
            PlayerAction::AllIn
        } else {
            PlayerAction::Call
        };
    }
    let target = target.clamp(view.min_raise_to, view.max_raise_to);
    if target == view.max_raise_to {
        if may_shove {
            PlayerAction::AllIn
        } else {
            PlayerAction::Call
        }
    } else {
        PlayerAction::RaiseTo(target)
    }
}

/// `base` scaled by `factor`, rounded to whole chips.
pub fn scaled(base: u32, factor: f64) -> u32 {
    (base as f64 * factor).round().max(0.0) as u32
}
