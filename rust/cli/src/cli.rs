//! Command-line definition.

use clap::{Parser, Subcommand};
use railbird_engine::table::{Difficulty, MAX_BOTS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "railbird",
    version,
    about = "No-limit hold'em trainer: one hero against scripted bots"
)]
pub struct RailbirdCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands interactively from stdin
    Play {
        /// Bots seated next to you
        #[arg(long, value_parser = parse_bots)]
        bots: Option<usize>,
        #[arg(long, default_value_t = 1)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Append finished hands to this JSONL file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Run a session with a check/call hero and report the outcome
    Sim {
        #[arg(long)]
        hands: u32,
        #[arg(long, value_parser = parse_bots)]
        bots: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Write one hand record per line to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

fn parse_bots(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (1..=MAX_BOTS).contains(&n) {
        Ok(n)
    } else {
        Err(format!("bots must be within 1..={}", MAX_BOTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bots_outside_the_table_are_rejected() {
        assert!(RailbirdCli::try_parse_from(["railbird", "play", "--bots", "0"]).is_err());
        assert!(RailbirdCli::try_parse_from(["railbird", "play", "--bots", "11"]).is_err());
        assert!(RailbirdCli::try_parse_from(["railbird", "play", "--bots", "10"]).is_ok());
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        let cli =
            RailbirdCli::try_parse_from(["railbird", "sim", "--hands", "2", "--difficulty", "HARD"])
                .unwrap();
        match cli.cmd {
            Commands::Sim { difficulty, .. } => assert_eq!(difficulty, Some(Difficulty::Hard)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn sim_requires_hands() {
        assert!(RailbirdCli::try_parse_from(["railbird", "sim"]).is_err());
    }
}
