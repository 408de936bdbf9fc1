//! # Railbird CLI Library
//!
//! Terminal front end for the railbird trainer table. [`run`] parses the
//! arguments, dispatches to a command handler and returns the exit code, so
//! the binary and the tests share one entry point.
//!
//! ## Subcommands
//!
//! - `play`: interactive hands against the heuristic bots
//! - `sim`: a session with a check/call hero, optionally written as JSONL
//! - `cfg`: the resolved configuration and where each value came from
//!
//! ```no_run
//! use std::io;
//! let args = ["railbird", "sim", "--hands", "10", "--seed", "42"];
//! let code = railbird_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, RailbirdCli};
use commands::{SessionArgs, handle_cfg_command, handle_play_command, handle_sim_command};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Parses `args` and runs the command.
///
/// Returns `0` on success, `2` for errors and `130` when interactive input
/// ends mid-session. Help and version go to `out` with code `0`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RailbirdCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return match write!(out, "{}", e) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(_) => exit_code::ERROR,
                };
            }
            let _ = write_usage(err, &e.to_string());
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            bots,
            hands,
            seed,
            difficulty,
            history,
        } => {
            let stdin = std::io::stdin();
            let mut stdin = stdin.lock();
            let args = SessionArgs {
                bots,
                seed,
                difficulty,
            };
            handle_play_command(args, hands, history, out, err, &mut stdin)
        }
        Commands::Sim {
            hands,
            bots,
            seed,
            difficulty,
            output,
        } => {
            let args = SessionArgs {
                bots,
                seed,
                difficulty,
            };
            handle_sim_command(args, hands, output, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = writeln!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_error: &str) -> std::io::Result<()> {
    writeln!(err, "{}", clap_error)?;
    writeln!(err, "Railbird poker trainer")?;
    writeln!(err, "Usage: railbird <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: railbird --help")
}

/// Installs the stderr tracing subscriber. The filter comes from
/// `RAILBIRD_LOG`, then `RUST_LOG`, and defaults to `warn`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("RAILBIRD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
