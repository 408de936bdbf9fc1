//! Flop, turn and river share one heuristic: a coarse strength score from the
//! hole cards and board, weighed against pot odds, seat position and the
//! difficulty profile.

use rand::{Rng, RngCore};
use railbird_engine::cards::Rank;
use railbird_engine::player::PlayerAction;
use railbird_engine::table::{Difficulty, TableStage};

use crate::profile::DifficultyProfile;
use crate::sizing::raise_to;
use crate::view::{BotView, Position};

/// Hole-card strength in `[0, 1]`, bumped when a hole card pairs the board.
///
/// Suited connectors only score as draws before the river.
pub fn strength(view: &BotView) -> f64 {
    let [a, b] = match view.hole_cards.as_slice() {
        [a, b] => [*a, *b],
        _ => return 0.0,
    };
    let (high, low) = if a.rank >= b.rank {
        (a.rank, b.rank)
    } else {
        (b.rank, a.rank)
    };
    let gap = high.value() - low.value();
    let drawing = view.stage != TableStage::River;

    let base: f64 = if high == low {
        match high {
            r if r >= Rank::Ten => 0.8,
            r if r >= Rank::Six => 0.6,
            _ => 0.45,
        }
    } else if low.is_broadway() {
        0.5
    } else if drawing && a.suit == b.suit && gap <= 1 {
        0.4
    } else if high >= Rank::Queen {
        0.3
    } else {
        0.15
    };

    let pairs_board = view
        .board
        .iter()
        .any(|c| c.rank == a.rank || c.rank == b.rank);
    let bonus = if pairs_board { 0.2 } else { 0.0 };
    (base + bonus).min(1.0)
}

/// Scales the raise chance: later seats act with more information.
fn position_weight(position: Position) -> f64 {
    match position {
        Position::Early => 0.8,
        Position::Middle => 1.0,
        Position::Late => 1.3,
    }
}

/// Chance of betting a hand too weak to value-raise.
///
/// Hard only bluffs from middle and late seats. Every opponent past the first
/// halves the chance.
pub(crate) fn bluff_chance(view: &BotView, profile: &DifficultyProfile) -> f64 {
    let seat_factor = match (view.difficulty, view.position) {
        (Difficulty::Hard, Position::Early) => 0.0,
        (_, Position::Early) => 0.5,
        (_, Position::Middle) => 1.0,
        (_, Position::Late) => 1.5,
    };
    let crowd = view.active_opponents.saturating_sub(1).min(8) as i32;
    profile.bluff_rate * seat_factor * 0.5f64.powi(crowd)
}

/// Strength needed to call at the current price.
pub(crate) fn call_threshold(view: &BotView, profile: &DifficultyProfile) -> f64 {
    let seat = match view.position {
        Position::Early => 0.03,
        Position::Middle => 0.0,
        Position::Late => -0.03,
    };
    view.pot_odds() + profile.call_margin + seat
}

pub fn decide(view: &BotView, rng: &mut dyn RngCore) -> PlayerAction {
    let profile = DifficultyProfile::for_difficulty(view.difficulty);
    let strength = strength(view);
    let odds = view.pot_odds();

    if view.to_call > 0 {
        let mut fold_chance = profile.fold_rate;
        if view.difficulty == Difficulty::Easy && strength >= 0.5 {
            fold_chance += 0.08;
        }
        if rng.random_bool(fold_chance) {
            return PlayerAction::Fold;
        }
    }

    let raise_chance =
        profile.raise_rate * (0.5 + strength) * (1.0 - odds) * position_weight(view.position);
    let bluff = if strength < 0.3 {
        bluff_chance(view, &profile)
    } else {
        0.0
    };
    if rng.random::<f64>() < raise_chance + bluff {
        let bb = view.big_blind;
        let pot_cap = (view.pot as f64 * 0.9) as u32;
        let cap = (bb * profile.raise_multiplier)
            .min(view.my_chips)
            .min(pot_cap)
            .max(bb);
        let increment = rng.random_range(bb..=cap);
        let may_shove = view.difficulty != Difficulty::Easy;
        return raise_to(view, view.highest_bet + increment, may_shove);
    }

    if view.to_call == 0 || strength >= call_threshold(view, &profile) {
        return PlayerAction::Call;
    }
    if rng.random_bool(profile.mistake_rate) {
        tracing::trace!(seat = view.seat, "loose call");
        return PlayerAction::Call;
    }
    // a seat that already put chips in this street defends a small raise more often
    let defend = if view.my_bet > 0 { 0.45 } else { 0.3 };
    if view.to_call <= view.big_blind && rng.random_bool(defend) {
        return PlayerAction::Call;
    }
    PlayerAction::Fold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Position;
    use railbird_engine::cards::{Card, Suit};
    use railbird_engine::table::TableStage;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn view(hole: [Card; 2], board: Vec<Card>, to_call: u32) -> BotView {
        BotView {
            seat: 2,
            hole_cards: hole.to_vec(),
            board,
            stage: TableStage::Flop,
            difficulty: Difficulty::Medium,
            pot: 300,
            highest_bet: to_call,
            my_bet: 0,
            my_chips: 4_000,
            to_call,
            big_blind: 50,
            min_raise_to: to_call + 50,
            max_raise_to: 4_000,
            position: Position::Middle,
            active_opponents: 2,
        }
    }

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn strength_tiers() {
        let kings = view([c(Rank::King, Suit::Spades), c(Rank::King, Suit::Clubs)], vec![], 0);
        assert_eq!(strength(&kings), 0.8);
        let broadway = view([c(Rank::Queen, Suit::Spades), c(Rank::Jack, Suit::Clubs)], vec![], 0);
        assert_eq!(strength(&broadway), 0.5);
        let junk = view([c(Rank::Nine, Suit::Spades), c(Rank::Four, Suit::Clubs)], vec![], 0);
        assert_eq!(strength(&junk), 0.15);
    }

    #[test]
    fn pairing_the_board_adds_strength() {
        let board = vec![
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Two, Suit::Diamonds),
            c(Rank::Jack, Suit::Spades),
        ];
        let v = view([c(Rank::Nine, Suit::Spades), c(Rank::Four, Suit::Clubs)], board, 0);
        assert!((strength(&v) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn never_folds_when_checking_is_free() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..200 {
            let v = view([c(Rank::Nine, Suit::Spades), c(Rank::Four, Suit::Clubs)], vec![], 0);
            assert_ne!(decide(&v, &mut rng), PlayerAction::Fold);
        }
    }

    #[test]
    fn raises_stay_inside_the_cap() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        for _ in 0..300 {
            let v = view([c(Rank::Ace, Suit::Spades), c(Rank::Ace, Suit::Clubs)], vec![], 100);
            if let PlayerAction::RaiseTo(t) = decide(&v, &mut rng) {
                // highest 100 plus at most min(3 × 50, 270)
                assert!((150..=250).contains(&t), "raise to {}", t);
            }
        }
    }

    fn junk() -> [Card; 2] {
        [c(Rank::Nine, Suit::Spades), c(Rank::Four, Suit::Clubs)]
    }

    fn count(mut v: impl FnMut() -> PlayerAction, hit: impl Fn(&PlayerAction) -> bool) -> usize {
        (0..2_000).filter(|_| hit(&v())).count()
    }

    #[test]
    fn suited_connectors_lose_their_draw_on_the_river() {
        let hole = [c(Rank::Eight, Suit::Hearts), c(Rank::Seven, Suit::Hearts)];
        let mut v = view(hole, vec![], 0);
        assert_eq!(strength(&v), 0.4);
        v.stage = TableStage::River;
        assert_eq!(strength(&v), 0.15);
    }

    #[test]
    fn late_seat_bets_junk_more_often_than_early() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let mut late = view(junk(), vec![], 0);
        late.difficulty = Difficulty::Hard;
        late.position = Position::Late;
        late.active_opponents = 1;
        let mut early = late.clone();
        early.position = Position::Early;

        let raised = |a: &PlayerAction| matches!(a, PlayerAction::RaiseTo(_) | PlayerAction::AllIn);
        let late_bets = count(|| decide(&late, &mut rng), raised);
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let early_bets = count(|| decide(&early, &mut rng), raised);
        assert!(late_bets > early_bets + 200, "late {} early {}", late_bets, early_bets);
    }

    #[test]
    fn hard_never_bluffs_from_early_and_crowds_damp_bluffs() {
        let hard = DifficultyProfile::for_difficulty(Difficulty::Hard);
        let mut v = view(junk(), vec![], 0);
        v.difficulty = Difficulty::Hard;

        v.position = Position::Early;
        assert_eq!(bluff_chance(&v, &hard), 0.0);

        v.position = Position::Late;
        v.active_opponents = 1;
        let heads_up = bluff_chance(&v, &hard);
        v.active_opponents = 3;
        let three_way = bluff_chance(&v, &hard);
        assert!((heads_up - 0.15).abs() < 1e-9);
        assert!((three_way - heads_up / 4.0).abs() < 1e-9);

        let easy = DifficultyProfile::for_difficulty(Difficulty::Easy);
        v.difficulty = Difficulty::Easy;
        assert_eq!(bluff_chance(&v, &easy), 0.0);
    }

    #[test]
    fn late_position_calls_wider() {
        let profile = DifficultyProfile::for_difficulty(Difficulty::Medium);
        let broadway = [c(Rank::Queen, Suit::Spades), c(Rank::Jack, Suit::Clubs)];
        // 250 into 300: odds about 0.45, strength 0.5
        let mut v = view(broadway, vec![], 250);
        v.position = Position::Late;
        assert!(strength(&v) >= call_threshold(&v, &profile));
        v.position = Position::Early;
        assert!(strength(&v) < call_threshold(&v, &profile));
    }

    #[test]
    fn easy_folds_strong_hands_more_than_medium() {
        let kings = [c(Rank::King, Suit::Spades), c(Rank::King, Suit::Clubs)];
        let mut easy = view(kings, vec![], 100);
        easy.difficulty = Difficulty::Easy;
        let medium = view(kings, vec![], 100);

        let folded = |a: &PlayerAction| *a == PlayerAction::Fold;
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        let easy_folds = count(|| decide(&easy, &mut rng), folded);
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        let medium_folds = count(|| decide(&medium, &mut rng), folded);
        // about 20% against 7%
        assert!(easy_folds > medium_folds + 120, "easy {} medium {}", easy_folds, medium_folds);
    }

    #[test]
    fn small_raises_are_defended_lightly() {
        let called = |a: &PlayerAction| *a == PlayerAction::Call;
        let mut rng = ChaCha20Rng::seed_from_u64(41);
        let one_bb = view(junk(), vec![], 50);
        let at_bb = count(|| decide(&one_bb, &mut rng), called);

        let over_bb = view(junk(), vec![], 60);
        let above = count(|| decide(&over_bb, &mut rng), called);
        assert!(at_bb > above + 200, "at bb {} above {}", at_bb, above);

        let mut invested = one_bb.clone();
        invested.my_bet = 50;
        let defended = count(|| decide(&invested, &mut rng), called);
        assert!(defended > at_bb + 80, "invested {} fresh {}", defended, at_bb);
    }
}
