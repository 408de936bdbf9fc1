//! Command handlers.
//!
//! Each command lives in its own module and exposes
//! `handle_<command>_command(...) -> Result<(), CliError>`, writing to the
//! streams it is given so tests can capture the output.

use rand::RngCore;
use railbird_engine::deck::entropy_rng;
use railbird_engine::table::{
    Difficulty, TableConfig, TableState, create_initial_table, perform_dealer_draw,
    reveal_dealer_draw,
};
use std::io::Write;

use crate::config;
use crate::error::CliError;

pub mod cfg;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

/// Table options given on the command line; unset ones fall back to the
/// resolved configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionArgs {
    pub bots: Option<usize>,
    pub seed: Option<u64>,
    pub difficulty: Option<Difficulty>,
}

pub(crate) struct Session {
    pub table: TableConfig,
    pub seed: u64,
}

impl SessionArgs {
    pub(crate) fn resolve(self) -> Result<Session, CliError> {
        let resolved = config::load_with_sources()?.config;
        let mut table = resolved.table_config();
        if let Some(bots) = self.bots {
            table.num_bots = bots;
        }
        if let Some(difficulty) = self.difficulty {
            table.difficulty = difficulty;
        }
        let seed = self
            .seed
            .or(resolved.seed)
            .unwrap_or_else(|| entropy_rng().next_u64());
        Ok(Session { table, seed })
    }
}

/// Seats the table and runs the dealer draw.
pub(crate) fn open_table(
    config: &TableConfig,
    rng: &mut dyn RngCore,
) -> Result<TableState, CliError> {
    let state = create_initial_table(config, rng)?;
    Ok(reveal_dealer_draw(perform_dealer_draw(state, rng)))
}

pub(crate) fn chips_in_play(state: &TableState) -> u32 {
    state.players.iter().map(|p| p.chips).sum::<u32>() + state.pot
}

pub(crate) fn write_stacks(out: &mut dyn Write, state: &TableState) -> Result<(), CliError> {
    for p in &state.players {
        writeln!(out, "  {:<8} {:>7}", p.name, p.chips)?;
    }
    Ok(())
}
