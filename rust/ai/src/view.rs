//! What a bot can see of the table at its turn.

use railbird_engine::cards::Card;
use railbird_engine::rules::{legal_actions, min_raise_to};
use railbird_engine::table::{max_bet, Difficulty, TableStage, TableState};

/// Seat position relative to the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Early,
    Middle,
    /// The button and the seats just before it
    Late,
}

/// Stack depth in big blinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackDepth {
    /// Under 20 big blinds
    Short,
    /// 20 to 60 big blinds
    Mid,
    /// Over 60 big blinds
    Deep,
}

#[derive(Debug, Clone)]
pub struct BotView {
    pub seat: usize,
    pub hole_cards: Vec<Card>,
    pub board: Vec<Card>,
    pub stage: TableStage,
    pub difficulty: Difficulty,
    pub pot: u32,
    pub highest_bet: u32,
    pub my_bet: u32,
    pub my_chips: u32,
    pub to_call: u32,
    pub big_blind: u32,
    pub min_raise_to: u32,
    pub max_raise_to: u32,
    pub position: Position,
    pub active_opponents: usize,
}

impl BotView {
    pub fn new(state: &TableState, seat: usize, difficulty: Difficulty) -> Self {
        let player = &state.players[seat];
        let limits = legal_actions(state, seat);
        let n = state.players.len();
        let position = match state.dealer_index {
            Some(dealer) => position_for(n, (seat + n - dealer) % n),
            None => Position::Middle,
        };
        Self {
            seat,
            hole_cards: player.hole_cards.clone(),
            board: state.board.clone(),
            stage: state.stage,
            difficulty,
            pot: state.pot,
            highest_bet: max_bet(state),
            my_bet: player.bet,
            my_chips: player.chips,
            to_call: limits.map_or(0, |l| l.to_call),
            big_blind: state.big_blind.max(1),
            min_raise_to: min_raise_to(state),
            max_raise_to: player.bet + player.chips,
            position,
            active_opponents: state
                .players
                .iter()
                .enumerate()
                .filter(|(i, p)| *i != seat && p.is_live())
                .count(),
        }
    }

    pub fn depth(&self) -> StackDepth {
        let bbs = self.my_chips / self.big_blind;
        if bbs < 20 {
            StackDepth::Short
        } else if bbs <= 60 {
            StackDepth::Mid
        } else {
            StackDepth::Deep
        }
    }

    pub fn is_late(&self) -> bool {
        self.position == Position::Late
    }

    /// Someone has raised past the big blind this street.
    pub fn is_opened(&self) -> bool {
        self.highest_bet > self.big_blind
    }

    /// Price of calling as a share of the pot after the call.
    pub fn pot_odds(&self) -> f64 {
        if self.to_call == 0 {
            return 0.0;
        }
        self.to_call as f64 / (self.pot + self.to_call) as f64
    }

    pub fn suited(&self) -> bool {
        matches!(self.hole_cards.as_slice(), [a, b] if a.suit == b.suit)
    }
}

/// `distance` is seats clockwise from the button (0 = button).
fn position_for(players: usize, distance: usize) -> Position {
    if distance == 0 || (players > 3 && distance + 1 == players) {
        return Position::Late;
    }
    if distance * 3 <= players {
        Position::Early
    } else {
        Position::Middle
    }
}
