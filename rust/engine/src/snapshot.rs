//! JSON snapshots of a [`TableState`].
//!
//! A snapshot is the state serialized as-is. Loading checks the shape first,
//! then decodes, then re-checks the table invariants so a hand-edited or
//! truncated file is rejected instead of resumed.

use serde_json::Value;

use crate::errors::GameError;
use crate::table::{check_invariants, TableState};

pub fn to_json(state: &TableState) -> Result<String, GameError> {
    serde_json::to_string(state).map_err(|e| GameError::Snapshot(e.to_string()))
}

pub fn to_json_pretty(state: &TableState) -> Result<String, GameError> {
    serde_json::to_string_pretty(state).map_err(|e| GameError::Snapshot(e.to_string()))
}

/// Restores a table written by [`to_json`].
///
/// # Errors
///
/// [`GameError::Snapshot`] for malformed JSON, a missing `players` array or
/// a shape that does not decode; [`GameError::Invariant`] when the decoded
/// table is inconsistent.
pub fn from_json(text: &str) -> Result<TableState, GameError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| GameError::Snapshot(e.to_string()))?;
    match value.get("players") {
        Some(Value::Array(players)) if !players.is_empty() => {}
        Some(_) => return Err(GameError::Snapshot("`players` must be a non-empty array".into())),
        None => return Err(GameError::Snapshot("missing `players` array".into())),
    }
    let state: TableState =
        serde_json::from_value(value).map_err(|e| GameError::Snapshot(e.to_string()))?;
    check_invariants(&state)?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_object_payloads() {
        assert!(matches!(from_json("[1, 2]"), Err(GameError::Snapshot(_))));
        assert!(matches!(from_json("not json"), Err(GameError::Snapshot(_))));
    }

    #[test]
    fn requires_players_array() {
        let err = from_json(r#"{"players": {}}"#).unwrap_err();
        assert_eq!(
            err,
            GameError::Snapshot("`players` must be a non-empty array".into())
        );
        let err = from_json(r#"{"stage": "PreFlop"}"#).unwrap_err();
        assert_eq!(err, GameError::Snapshot("missing `players` array".into()));
    }
}
