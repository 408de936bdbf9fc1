use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;
use crate::table::{max_bet, to_call, TableState};

/// Betting limits for one seat at the current decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    /// Chips owed to match the highest bet
    pub to_call: u32,
    /// Smallest legal raise target (street total)
    pub min_raise_to: u32,
    /// Largest raise target the stack can fund
    pub max_raise_to: u32,
}

impl LegalActions {
    pub fn can_check(&self) -> bool {
        self.to_call == 0
    }

    /// A full minimum raise is affordable; shorter stacks can only go all-in.
    pub fn can_raise(&self) -> bool {
        self.max_raise_to >= self.min_raise_to
    }
}

/// Smallest legal raise target: the highest bet plus one big blind.
pub fn min_raise_to(state: &TableState) -> u32 {
    max_bet(state) + state.big_blind
}

/// Limits for `seat`, or `None` when that seat cannot act.
pub fn legal_actions(state: &TableState, seat: usize) -> Option<LegalActions> {
    let p = state.players.get(seat)?;
    if !p.can_act() {
        return None;
    }
    Some(LegalActions {
        to_call: to_call(state, seat),
        min_raise_to: min_raise_to(state),
        max_raise_to: p.bet + p.chips,
    })
}

/// Checks an action against the table's betting limits.
///
/// Returns the action to execute: raises the stack cannot fund beyond the
/// target become [`A::AllIn`].
///
/// # Errors
///
/// - [`GameError::NoHandInProgress`] when `seat` cannot act
/// - [`GameError::InvalidBetAmount`] for a raise target below
///   [`min_raise_to`] that is not all-in
///
/// # Examples
///
/// ```
/// use railbird_engine::player::PlayerAction;
/// use railbird_engine::rules::validate_action;
/// use railbird_engine::table::{create_initial_table, start_new_hand, TableConfig};
/// use railbird_engine::deck::seeded_rng;
///
/// let mut rng = seeded_rng(1);
/// let config = TableConfig { num_bots: 2, ..TableConfig::default() };
/// let table = create_initial_table(&config, &mut rng).unwrap();
/// let table = start_new_hand(table, &mut rng);
///
/// let seat = table.current_player_index.unwrap();
/// assert!(validate_action(&table, seat, PlayerAction::RaiseTo(60)).is_err());
/// assert_eq!(
///     validate_action(&table, seat, PlayerAction::RaiseTo(100)),
///     Ok(PlayerAction::RaiseTo(100))
/// );
/// assert_eq!(
///     validate_action(&table, seat, PlayerAction::RaiseTo(1_000_000)),
///     Ok(PlayerAction::AllIn)
/// );
/// ```
pub fn validate_action(state: &TableState, seat: usize, action: A) -> Result<A, GameError> {
    let limits = legal_actions(state, seat).ok_or(GameError::NoHandInProgress)?;
    match action {
        A::Fold | A::Call | A::AllIn => Ok(action),
        A::RaiseTo(target) => {
            if target >= limits.max_raise_to {
                Ok(A::AllIn)
            } else if target < limits.min_raise_to {
                Err(GameError::InvalidBetAmount {
                    amount: target,
                    minimum: limits.min_raise_to,
                })
            } else {
                Ok(A::RaiseTo(target))
            }
        }
    }
}
