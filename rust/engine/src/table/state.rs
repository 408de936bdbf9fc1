use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::chips::ChipStack;
use crate::deck::DECK_SIZE;
use crate::errors::GameError;
use crate::logger::{timestamp, LogEntry, LogKind};
use crate::player::{ActionOutcome, Player, STARTING_STACK};

/// Where a table is in its per-hand lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TableStage {
    /// Choosing the first dealer; no hand dealt yet
    DealerDraw,
    PreFlop,
    Flop,
    Turn,
    River,
    /// Pot awarded; waiting for the next hand
    Showdown,
}

impl TableStage {
    /// A betting street is being played.
    pub fn is_betting(self) -> bool {
        matches!(
            self,
            TableStage::PreFlop | TableStage::Flop | TableStage::Turn | TableStage::River
        )
    }
}

impl fmt::Display for TableStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableStage::DealerDraw => "Dealer draw",
            TableStage::PreFlop => "Pre-flop",
            TableStage::Flop => "Flop",
            TableStage::Turn => "Turn",
            TableStage::River => "River",
            TableStage::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}

/// Bot skill tier.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidConfig(format!(
                "unknown difficulty '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// How a hand that reaches the river is settled.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ShowdownRule {
    /// Best single card among hole cards and board wins; further cards break ties
    #[default]
    HighCard,
    /// Full five-card ranking; exact ties split the pot
    BestHand,
}

impl FromStr for ShowdownRule {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "highcard" => Ok(ShowdownRule::HighCard),
            "besthand" => Ok(ShowdownRule::BestHand),
            other => Err(GameError::InvalidConfig(format!(
                "unknown showdown rule '{}'",
                other
            ))),
        }
    }
}

/// Most bots a table seats next to the hero.
pub const MAX_BOTS: usize = 10;

/// Parameters for [`create_initial_table`](crate::table::create_initial_table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    pub num_bots: usize,
    pub starting_chips: u32,
    /// Denomination breakdown given to every seat; derived from
    /// `starting_chips` when absent
    #[serde(default)]
    pub initial_chip_stack: Option<ChipStack>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub showdown_rule: ShowdownRule,
    #[serde(default = "default_hero_name")]
    pub hero_name: String,
}

fn default_hero_name() -> String {
    "You".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 25,
            big_blind: 50,
            num_bots: 5,
            starting_chips: STARTING_STACK,
            initial_chip_stack: None,
            difficulty: Difficulty::default(),
            showdown_rule: ShowdownRule::default(),
            hero_name: default_hero_name(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: &str| Err(GameError::InvalidConfig(msg.to_string()));
        if self.small_blind == 0 {
            return invalid("small_blind must be > 0");
        }
        if self.big_blind < self.small_blind {
            return invalid("big_blind must be >= small_blind");
        }
        if self.num_bots == 0 || self.num_bots > MAX_BOTS {
            return Err(GameError::InvalidConfig(format!(
                "num_bots must be within 1..={}",
                MAX_BOTS
            )));
        }
        if self.starting_chips == 0 {
            return invalid("starting_chips must be > 0");
        }
        let seats = u32::try_from(self.num_bots + 1).unwrap_or(u32::MAX);
        if self.starting_chips.checked_mul(seats).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "{} seats of {} chips exceed the largest pot ({})",
                seats,
                self.starting_chips,
                u32::MAX
            )));
        }
        if let Some(stack) = &self.initial_chip_stack {
            if stack.total() != self.starting_chips {
                return Err(GameError::InvalidConfig(format!(
                    "initial_chip_stack totals {} but starting_chips is {}",
                    stack.total(),
                    self.starting_chips
                )));
            }
            let unknown = stack.unknown_denominations();
            if !unknown.is_empty() {
                return Err(GameError::InvalidConfig(format!(
                    "unsupported chip denominations {:?}",
                    unknown
                )));
            }
        }
        Ok(())
    }

    pub fn chip_stack(&self) -> ChipStack {
        self.initial_chip_stack
            .clone()
            .unwrap_or_else(|| ChipStack::from_amount(self.starting_chips))
    }
}

/// Bookkeeping for the dealer-draw sub-protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealingState {
    /// Seat that drew the winning card
    pub high_card_seat: Option<usize>,
    pub high_card: Option<Card>,
}

/// The most recent pot award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_number: u32,
    pub winners: Vec<usize>,
    pub amount: u32,
    pub reason: String,
}

/// The whole table: seats, cards, pot, pointers and log.
///
/// Transitions take the state by value and hand back its successor; keep a
/// clone if the previous snapshot is still needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub stage: TableStage,
    /// Remaining cards; dealt from the end
    pub deck: Vec<Card>,
    pub burned: Vec<Card>,
    pub board: Vec<Card>,
    pub players: Vec<Player>,
    pub dealer_index: Option<usize>,
    pub small_blind_index: Option<usize>,
    pub big_blind_index: Option<usize>,
    pub current_player_index: Option<usize>,
    pub pot: u32,
    pub pot_stack: ChipStack,
    pub small_blind: u32,
    pub big_blind: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub showdown_rule: ShowdownRule,
    pub hand_number: u32,
    /// Highest bet on the current street
    pub current_bet: u32,
    pub dealer_draw_cards: BTreeMap<String, Option<Card>>,
    pub dealer_draw_revealed: bool,
    pub dealer_draw_in_progress: bool,
    pub action_log: Vec<LogEntry>,
    pub dealing_state: DealingState,
    /// A bot whose turn is ready to be resolved
    pub bot_pending_index: Option<usize>,
    #[serde(default)]
    pub last_result: Option<HandResult>,
}

impl TableState {
    pub(crate) fn log(&mut self, kind: LogKind, message: impl Into<String>) {
        self.push_log(kind, None, None, message.into());
    }

    pub(crate) fn log_seat(
        &mut self,
        seat: usize,
        outcome: Option<ActionOutcome>,
        message: impl Into<String>,
    ) {
        let kind = if outcome.is_some() {
            LogKind::Action
        } else {
            LogKind::Info
        };
        self.push_log(kind, Some(seat), outcome, message.into());
    }

    pub(crate) fn push_log(
        &mut self,
        kind: LogKind,
        seat: Option<usize>,
        outcome: Option<ActionOutcome>,
        message: String,
    ) {
        self.action_log.push(LogEntry {
            hand_number: self.hand_number,
            stage: self.stage,
            kind,
            seat,
            outcome,
            message,
            time: timestamp(),
        });
    }

    pub(crate) fn seat_count(&self) -> usize {
        self.players.len()
    }

    /// Next seat clockwise from `from` (exclusive) matching `pred`.
    pub(crate) fn next_seat_where<F>(&self, from: usize, pred: F) -> Option<usize>
    where
        F: Fn(&Player) -> bool,
    {
        let n = self.seat_count();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&i| pred(&self.players[i]))
    }
}

/// Seat of the hero, if one is seated.
pub fn get_hero_index(state: &TableState) -> Option<usize> {
    state.players.iter().position(|p| p.is_hero())
}

/// Highest bet any player has made on the current street.
pub fn max_bet(state: &TableState) -> u32 {
    state.players.iter().map(|p| p.bet).max().unwrap_or(0)
}

/// Chips `seat` still owes to match the highest bet.
pub fn to_call(state: &TableState, seat: usize) -> u32 {
    state
        .players
        .get(seat)
        .map(|p| max_bet(state).saturating_sub(p.bet))
        .unwrap_or(0)
}

/// Players still contesting the pot.
pub fn active_player_count(state: &TableState) -> usize {
    state.players.iter().filter(|p| p.is_live()).count()
}

/// Fewer than two seats have chips left; no further hand can be dealt.
pub fn is_game_over(state: &TableState) -> bool {
    state.players.iter().filter(|p| p.chips > 0).count() < 2 && !state.stage.is_betting()
}

/// Checks the structural invariants every transition must preserve.
///
/// # Errors
///
/// [`GameError::Invariant`] naming the first broken rule.
pub fn check_invariants(state: &TableState) -> Result<(), GameError> {
    let broken = |msg: String| Err(GameError::Invariant(msg));
    let n = state.players.len();
    if n == 0 {
        return broken("table has no players".into());
    }
    for p in &state.players {
        if p.chip_stack.total() != p.chips {
            return broken(format!(
                "{}: chip stack totals {} but chips is {}",
                p.name,
                p.chip_stack.total(),
                p.chips
            ));
        }
        if p.hole_cards.len() > 2 {
            return broken(format!("{} holds {} cards", p.name, p.hole_cards.len()));
        }
    }
    if state.pot_stack.total() != state.pot {
        return broken(format!(
            "pot stack totals {} but pot is {}",
            state.pot_stack.total(),
            state.pot
        ));
    }
    for (name, idx) in [
        ("dealer", state.dealer_index),
        ("small blind", state.small_blind_index),
        ("big blind", state.big_blind_index),
        ("current player", state.current_player_index),
        ("pending bot", state.bot_pending_index),
    ] {
        if let Some(i) = idx {
            if i >= n {
                return broken(format!("{} index {} out of range", name, i));
            }
        }
    }
    if state.stage.is_betting() {
        if let Some(i) = state.current_player_index {
            if !state.players[i].can_act() {
                return broken(format!("current player {} cannot act", i));
            }
        }
        let mut seen = HashSet::new();
        let cards = state
            .deck
            .iter()
            .chain(&state.burned)
            .chain(&state.board)
            .chain(state.players.iter().flat_map(|p| &p.hole_cards));
        let mut total = 0;
        for c in cards {
            total += 1;
            if !seen.insert(*c) {
                return broken(format!("card {} appears twice", c));
            }
        }
        if total != DECK_SIZE {
            return broken(format!("{} cards in play, expected {}", total, DECK_SIZE));
        }
    }
    Ok(())
}
