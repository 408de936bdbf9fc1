use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid raise target: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Insufficient chips: requested {requested}, available {available}")]
    InsufficientChips { requested: u32, available: u32 },
    #[error("No hero is seated at this table")]
    NoHeroSeated,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Player already folded")]
    PlayerAlreadyFolded,
    #[error("It's not seat {actual}'s turn (expected seat {expected:?})")]
    NotPlayersTurn {
        expected: Option<usize>,
        actual: usize,
    },
    #[error("Invalid table snapshot: {0}")]
    Snapshot(String),
    #[error("Table invariant violated: {0}")]
    Invariant(String),
}
