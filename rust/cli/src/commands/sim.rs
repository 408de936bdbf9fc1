//! Simulation: the hero seat is played by [`PassiveBot`], every other seat by
//! the heuristic bot. Each finished hand can be written as one JSON line, and
//! the table is checked for chip conservation after every hand.
//!
//! ```no_run
//! use railbird_cli::commands::{SessionArgs, handle_sim_command};
//! use std::io;
//!
//! let args = SessionArgs { seed: Some(42), ..SessionArgs::default() };
//! handle_sim_command(args, 100, Some("data/sim.jsonl".into()), &mut io::stdout(), &mut io::stderr())
//!     .unwrap();
//! ```

use railbird_ai::{HeuristicBot, PassiveBot};
use railbird_engine::deck::seeded_rng;
use railbird_engine::errors::GameError;
use railbird_engine::logger::{HandLogger, HandRecord};
use railbird_engine::policy::BotPolicy;
use railbird_engine::table::{
    check_invariants, get_hero_index, is_game_over, run_pending_bots, start_new_hand,
    try_hero_action,
};
use std::io::Write;
use std::path::PathBuf;

use super::{SessionArgs, chips_in_play, open_table, write_stacks};
use crate::error::CliError;
use crate::ui;
use crate::validation::validate_hands;

pub fn handle_sim_command(
    args: SessionArgs,
    hands: u32,
    output: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
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
    let bots = HeuristicBot::new();
    let hero_policy = PassiveBot;

    writeln!(
        out,
        "sim: hands={} bots={} seed={} difficulty={}",
        hands, session.table.num_bots, session.seed, session.table.difficulty
    )?;

    let mut state = open_table(&session.table, &mut rng)?;
    let total = chips_in_play(&state);
    let mut logger = output.as_ref().map(HandLogger::create).transpose()?;

    let mut played = 0u32;
    for _ in 0..hands {
        if is_game_over(&state) {
            ui::display_warning(
                err,
                &format!("game over after {} of {} hands", played, hands),
            )?;
            break;
        }
        state = start_new_hand(state, &mut rng);
        while state.stage.is_betting() {
            state = run_pending_bots(state, &bots, &mut rng);
            if !state.stage.is_betting() {
                break;
            }
            let hero = get_hero_index(&state).ok_or(GameError::NoHeroSeated)?;
            let action = hero_policy.decide(&state, hero, &mut rng);
            state = try_hero_action(state, action)?;
        }

        check_invariants(&state)?;
        let now = chips_in_play(&state);
        if now != total {
            return Err(GameError::Invariant(format!(
                "chips in play changed from {} to {} in hand #{}",
                total, now, state.hand_number
            ))
            .into());
        }
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            if let Some(record) = HandRecord::from_table(&state, id, Some(session.seed)) {
                logger.write(&record)?;
            }
        }
        played += 1;
    }

    tracing::info!(played, seed = session.seed, "simulation finished");
    writeln!(out, "Hands played: {}", played)?;
    writeln!(out, "Final stacks:")?;
    write_stacks(out, &state)?;
    writeln!(out, "Chips in play: {} (conserved)", total)?;
    if let Some(path) = output {
        writeln!(out, "History: {} ({} hands)", path.display(), played)?;
    }
    Ok(())
}
