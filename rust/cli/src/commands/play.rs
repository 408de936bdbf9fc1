//! # Play Command
//!
//! Interactive hands against the heuristic bots. Bots act immediately; the
//! command stops at each hero decision, shows the table and reads one line
//! from stdin.
//!
//! Input: `fold`, `check`, `call`, `raise <to>`, `allin`, `q`.

use railbird_ai::HeuristicBot;
use railbird_engine::deck::seeded_rng;
use railbird_engine::logger::{HandLogger, HandRecord};
use railbird_engine::table::{
    TableState, get_hero_index, is_game_over, run_pending_bots, start_new_hand, try_hero_action,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::{SessionArgs, open_table, write_stacks};
use crate::error::CliError;
use crate::formatters::format_hero_prompt;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action, validate_hands};

/// How one hand ended from the session's point of view.
enum HandEnd {
    Finished,
    Quit,
    InputClosed,
}

/// Plays up to `hands` hands, stopping early on `q`, end of input, or when
/// fewer than two seats have chips.
///
/// # Errors
///
/// - [`CliError::InvalidInput`] for zero hands
/// - [`CliError::Config`] / [`CliError::Engine`] for an unusable table
/// - [`CliError::Interrupted`] when input ends mid-session
pub fn handle_play_command(
    args: SessionArgs,
    hands: u32,
    history: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = match validate_hands(hands) {
        Ok(n) => n,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let session = args.resolve()?;
    let mut rng = seeded_rng(session.seed);
    let bot = HeuristicBot::new();

    writeln!(
        out,
        "play: bots={} hands={} seed={} difficulty={}",
        session.table.num_bots, hands, session.seed, session.table.difficulty
    )?;
    tracing::info!(seed = session.seed, hands, "play session started");

    let mut state = open_table(&session.table, &mut rng)?;
    let mut logger = history.map(HandLogger::create).transpose()?;
    let mut printed = 0usize;
    print_new_log(&state, &mut printed, out)?;

    let mut played = 0u32;
    let mut closed = false;
    for _ in 0..hands {
        if is_game_over(&state) {
            writeln!(out, "Game over: fewer than two players have chips.")?;
            break;
        }
        state = start_new_hand(state, &mut rng);

        let end = loop {
            state = run_pending_bots(state, &bot, &mut rng);
            print_new_log(&state, &mut printed, out)?;
            if !state.stage.is_betting() {
                break HandEnd::Finished;
            }
            let Some(hero) = get_hero_index(&state) else {
                break HandEnd::Finished;
            };
            for line in format_hero_prompt(&state, hero) {
                writeln!(out, "{}", line)?;
            }
            write!(out, "> ")?;
            out.flush()?;

            let Some(input) = read_stdin_line(stdin) else {
                break HandEnd::InputClosed;
            };
            match parse_player_action(&input) {
                ParseResult::Quit => break HandEnd::Quit,
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                ParseResult::Action(action) => match try_hero_action(state.clone(), action) {
                    Ok(next) => state = next,
                    Err(e) => ui::write_error(err, &e.to_string())?,
                },
            }
        };

        match end {
            HandEnd::Finished => {
                played += 1;
                if let Some(logger) = logger.as_mut() {
                    let id = logger.next_id();
                    if let Some(record) = HandRecord::from_table(&state, id, Some(session.seed)) {
                        logger.write(&record)?;
                    }
                }
            }
            HandEnd::Quit => break,
            HandEnd::InputClosed => {
                closed = true;
                break;
            }
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    writeln!(out, "Stacks:")?;
    write_stacks(out, &state)?;
    if closed {
        return Err(CliError::Interrupted("input closed mid-hand".to_string()));
    }
    Ok(())
}

fn print_new_log(
    state: &TableState,
    printed: &mut usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    for entry in state.action_log.iter().skip(*printed) {
        writeln!(out, "  {}", entry.message)?;
    }
    *printed = state.action_log.len();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use railbird_engine::table::Difficulty;
    use serial_test::serial;
    use std::io::Cursor;

    fn args(seed: u64) -> SessionArgs {
        SessionArgs {
            bots: Some(2),
            seed: Some(seed),
            difficulty: Some(Difficulty::Easy),
        }
    }

    #[test]
    #[serial]
    fn zero_hands_is_invalid_input() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let result = handle_play_command(args(1), 0, None, &mut out, &mut err, &mut input);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn quitting_prints_the_summary() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"q\n".repeat(4));
        let result = handle_play_command(args(42), 1, None, &mut out, &mut err, &mut input);
        assert!(result.is_ok());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("play: bots=2 hands=1 seed=42 difficulty=easy"));
        assert!(text.contains("New hand #1"));
        assert!(text.contains("Stacks:"));
    }

    #[test]
    #[serial]
    fn folding_every_hand_finishes_the_session() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new("fold\n".repeat(20));
        let result = handle_play_command(args(7), 3, None, &mut out, &mut err, &mut input);
        assert!(result.is_ok(), "{:?}", String::from_utf8_lossy(&err));
        assert!(String::from_utf8(out).unwrap().contains("Hands played: 3"));
    }

    #[test]
    #[serial]
    fn bad_input_is_reported_and_reprompted() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new("dance\nfold\n".repeat(10));
        let result = handle_play_command(args(3), 1, None, &mut out, &mut err, &mut input);
        assert!(result.is_ok());
        let errors = String::from_utf8(err).unwrap();
        if String::from_utf8(out).unwrap().contains("Your cards") {
            assert!(errors.contains("Unrecognized action 'dance'"));
        }
    }
}
