//! Preflop decision table: hand category × stack depth × difficulty, split by
//! whether the pot has been opened past the big blind.

use rand::{Rng, RngCore};
use railbird_engine::hand::{HandCategory, categorize_preflop_hand};
use railbird_engine::player::PlayerAction;
use railbird_engine::table::Difficulty;

use crate::sizing::{raise_to, scaled};
use crate::view::{BotView, Position, StackDepth};

pub fn decide(view: &BotView, rng: &mut dyn RngCore) -> PlayerAction {
    let category = categorize_preflop_hand(&view.hole_cards);
    match view.depth() {
        StackDepth::Short => short_stack(view, category),
        _ if view.is_opened() => facing_raise(view, category, rng),
        _ => unopened(view, category, rng),
    }
}

fn check_or_fold(view: &BotView) -> PlayerAction {
    if view.to_call == 0 {
        PlayerAction::Call
    } else {
        PlayerAction::Fold
    }
}

fn short_stack(view: &BotView, category: HandCategory) -> PlayerAction {
    match category {
        HandCategory::Premium => match view.difficulty {
            Difficulty::Easy => raise_to(view, view.min_raise_to, false),
            Difficulty::Medium | Difficulty::Hard => PlayerAction::AllIn,
        },
        HandCategory::Good => {
            if view.to_call * 3 <= view.my_chips || view.difficulty == Difficulty::Easy {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        }
        HandCategory::Speculative if view.to_call <= view.big_blind => PlayerAction::Call,
        HandCategory::Speculative | HandCategory::Trash => check_or_fold(view),
    }
}

/// Open size in big blinds, nudged by seat and stack depth.
fn open_size(view: &BotView, rng: &mut dyn RngCore) -> f64 {
    let mut size = rng.random_range(2.0..3.0);
    size += match view.position {
        Position::Early => 0.2,
        Position::Middle => 0.0,
        Position::Late => -0.1,
    };
    if view.depth() == StackDepth::Deep {
        size += 0.1;
    }
    size
}

fn unopened(view: &BotView, category: HandCategory, rng: &mut dyn RngCore) -> PlayerAction {
    let may_shove = view.difficulty != Difficulty::Easy;
    match category {
        HandCategory::Premium | HandCategory::Good => {
            let target = scaled(view.big_blind, open_size(view, rng));
            raise_to(view, target, may_shove)
        }
        HandCategory::Speculative => {
            if view.difficulty == Difficulty::Hard && view.is_late() && rng.random_bool(0.3) {
                let target = scaled(view.big_blind, rng.random_range(2.0..2.5));
                raise_to(view, target, may_shove)
            } else {
                PlayerAction::Call
            }
        }
        HandCategory::Trash => check_or_fold(view),
    }
}

fn facing_raise(view: &BotView, category: HandCategory, rng: &mut dyn RngCore) -> PlayerAction {
    let may_shove = view.difficulty != Difficulty::Easy;
    let odds = view.pot_odds();
    match category {
        HandCategory::Premium => {
            let deep = view.depth() == StackDepth::Deep;
            if view.difficulty == Difficulty::Hard && deep && rng.random_bool(0.05) {
                return PlayerAction::AllIn;
            }
            let target = scaled(view.highest_bet, rng.random_range(2.0..4.0));
            raise_to(view, target, may_shove)
        }
        HandCategory::Good => {
            let reraise = match view.difficulty {
                Difficulty::Easy => 0.1,
                Difficulty::Medium => 0.2,
                Difficulty::Hard => 0.3,
            };
            if rng.random_bool(reraise) {
                let target = scaled(view.highest_bet, rng.random_range(2.0..3.0));
                raise_to(view, target, may_shove)
            } else if odds <= 0.33 || view.is_late() {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        }
        HandCategory::Speculative => {
            if view.difficulty == Difficulty::Hard && view.is_late() && rng.random_bool(0.07) {
                let target = scaled(view.highest_bet, rng.random_range(2.0..3.0));
                raise_to(view, target, may_shove)
            } else if odds <= 0.22 && (view.is_late() || view.suited()) {
                PlayerAction::Call
            } else {
                check_or_fold(view)
            }
        }
        HandCategory::Trash => check_or_fold(view),
    }
}
