//! Parsing of interactive input and checks on numeric arguments.

use railbird_engine::player::PlayerAction;

/// What a line typed at the action prompt means.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    /// Unusable input, with a message for the user
    Invalid(String),
}

/// Parses an action typed by the hero (case-insensitive).
///
/// - `f` / `fold`
/// - `k` / `check`, `c` / `call` (both settle as a call; nothing owed is a check)
/// - `r <to>` / `raise <to>`: the street total to raise to, not the increment
/// - `a` / `allin` / `all-in`
/// - `q` / `quit`
///
/// ```rust
/// use railbird_cli::validation::{parse_player_action, ParseResult};
/// use railbird_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(parse_player_action("raise 150"), ParseResult::Action(PlayerAction::RaiseTo(150)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "f" | "fold" => ParseResult::Action(PlayerAction::Fold),
        "k" | "check" | "c" | "call" => ParseResult::Action(PlayerAction::Call),
        "a" | "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "r" | "raise" => match parts.get(1).map(|s| s.parse::<u32>()) {
            None => ParseResult::Invalid(
                "Raise needs the total to raise to (e.g. 'raise 150')".to_string(),
            ),
            Some(Ok(0)) => ParseResult::Invalid("Raise amount must be positive".to_string()),
            Some(Ok(target)) => ParseResult::Action(PlayerAction::RaiseTo(target)),
            Some(Err(_)) => ParseResult::Invalid(format!("Invalid raise amount '{}'", parts[1])),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <to>, allin, q",
            other
        )),
    }
}

/// Hand counts must be at least one.
pub fn validate_hands(hands: u32) -> Result<u32, String> {
    if hands == 0 {
        Err("hands must be >= 1".to_string())
    } else {
        Ok(hands)
    }
}
