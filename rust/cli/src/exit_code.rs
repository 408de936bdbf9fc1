//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, engine refusal or I/O failure.
pub const ERROR: i32 = 2;

/// Input closed before an interactive session finished.
pub const INTERRUPTED: i32 = 130;
