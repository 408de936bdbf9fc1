//! `cfg`: the resolved configuration as JSON, one `{value, source}` pair per
//! field.
//!
//! ```json
//! {
//!   "bots": { "value": 5, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "bots": { "value": config.bots, "source": sources.bots },
        "difficulty": { "value": config.difficulty.to_string(), "source": sources.difficulty },
        "starting_chips": { "value": config.starting_chips, "source": sources.starting_chips },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "showdown": { "value": config.showdown, "source": sources.showdown },
    });
    let json = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
