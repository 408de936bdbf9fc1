use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::chips::ChipStack;

/// Who controls a seat. A seat is either the hero or a bot, never both.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SeatKind {
    /// The human player, driven by hero action calls
    Hero,
    /// A scripted opponent, resolved through a bot policy
    Bot,
}

/// What a player asks to do when it is their turn.
///
/// Hero calls and bot decisions share this vocabulary; the engine clamps the
/// request against the player's stack and reports what happened as an
/// [`ActionOutcome`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Match the highest bet, or check when nothing is owed
    Call,
    /// Raise so this street's total bet becomes the given amount
    RaiseTo(u32),
    /// Commit every remaining chip
    AllIn,
}

/// The settled result of a betting action after clamping.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Forced bet; `all_in` when the blind emptied the stack
    Blind { amount: u32, all_in: bool },
    Folded,
    Checked,
    /// Paid this many chips to match the highest bet
    Called(u32),
    /// Street total after the raise
    RaisedTo(u32),
    /// Paid the whole stack; `total_bet` is the street total afterwards
    AllIn { paid: u32, total_bet: u32 },
}

/// Default starting stack for a new seat when the config does not say otherwise.
pub const STARTING_STACK: u32 = 5_000;

/// A seat at the table with its chips, cards and per-street betting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier for the lifetime of the table
    pub id: String,
    pub name: String,
    pub kind: SeatKind,
    /// Abstract chip balance behind the line
    pub chips: u32,
    /// Denomination breakdown of `chips`
    pub chip_stack: ChipStack,
    /// Contribution on the current street
    pub bet: u32,
    pub hole_cards: Vec<Card>,
    pub has_folded: bool,
    pub seat_index: usize,
    #[serde(default)]
    pub has_acted: bool,
    #[serde(default)]
    pub is_all_in: bool,
    #[serde(default)]
    pub last_action: Option<ActionOutcome>,
}

impl Player {
    pub fn new(
        id: String,
        name: impl Into<String>,
        kind: SeatKind,
        seat_index: usize,
        chip_stack: ChipStack,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            chips: chip_stack.total(),
            chip_stack,
            bet: 0,
            hole_cards: Vec::with_capacity(2),
            has_folded: false,
            seat_index,
            has_acted: false,
            is_all_in: false,
            last_action: None,
        }
    }

    pub fn is_hero(&self) -> bool {
        self.kind == SeatKind::Hero
    }

    pub fn is_bot(&self) -> bool {
        self.kind == SeatKind::Bot
    }

    /// Still contesting the pot.
    pub fn is_live(&self) -> bool {
        !self.has_folded
    }

    /// Live and holding chips, so able to take a betting action.
    pub fn can_act(&self) -> bool {
        !self.has_folded && self.chips > 0
    }

    /// Moves `amount` chips from the stack into this street's bet and returns
    /// the physical chips that left the stack.
    ///
    /// Callers clamp `amount` to `chips` first. If the breakdown has drifted
    /// from the total it is rebuilt from `chips` before withdrawing.
    pub(crate) fn commit(&mut self, amount: u32) -> ChipStack {
        let amount = amount.min(self.chips);
        if self.chip_stack.total() != self.chips {
            self.chip_stack = ChipStack::from_amount(self.chips);
        }
        let taken = match self.chip_stack.withdraw(amount) {
            Ok(taken) => taken,
            Err(_) => {
                self.chip_stack = ChipStack::from_amount(self.chips - amount);
                ChipStack::from_amount(amount)
            }
        };
        self.chips -= amount;
        self.bet += amount;
        if self.chips == 0 {
            self.is_all_in = true;
        }
        taken
    }

    pub(crate) fn collect(&mut self, amount: u32, chips: &ChipStack) {
        self.chips = self.chips.saturating_add(amount);
        self.chip_stack.deposit(chips);
    }

    pub(crate) fn reset_for_hand(&mut self) {
        self.bet = 0;
        self.hole_cards.clear();
        self.has_folded = self.chips == 0;
        self.has_acted = false;
        self.is_all_in = false;
        self.last_action = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(chips: u32) -> Player {
        Player::new(
            "p".into(),
            "Test",
            SeatKind::Bot,
            1,
            ChipStack::from_amount(chips),
        )
    }

    #[test]
    fn commit_moves_chips_into_bet() {
        let mut p = seat(1_000);
        let taken = p.commit(150);
        assert_eq!(taken.total(), 150);
        assert_eq!(p.chips, 850);
        assert_eq!(p.bet, 150);
        assert_eq!(p.chip_stack.total(), 850);
        assert!(!p.is_all_in);
    }

    #[test]
    fn commit_is_clamped_to_stack_and_flags_all_in() {
        let mut p = seat(40);
        let taken = p.commit(100);
        assert_eq!(taken.total(), 40);
        assert_eq!(p.chips, 0);
        assert_eq!(p.bet, 40);
        assert!(p.is_all_in);
        assert!(!p.can_act());
        assert!(p.is_live());
    }

    #[test]
    fn drifted_breakdown_is_rebuilt() {
        let mut p = seat(500);
        p.chip_stack = ChipStack::from_amount(20);
        let taken = p.commit(100);
        assert_eq!(taken.total(), 100);
        assert_eq!(p.chip_stack.total(), p.chips);
    }

    #[test]
    fn busted_seat_sits_out_next_hand() {
        let mut p = seat(10);
        p.commit(10);
        p.reset_for_hand();
        assert!(p.has_folded);
        assert!(!p.is_all_in);
    }
}
