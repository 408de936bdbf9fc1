//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the variant to a process exit code.

use railbird_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::exit_code;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (history files, stdout/stderr writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The engine refused a table or an action
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    /// Input ended before the session finished
    #[error("Interrupted: {0}")]
    Interrupted(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Interrupted(_) => exit_code::INTERRUPTED,
            _ => exit_code::ERROR,
        }
    }
}
