//! Session configuration: built-in defaults, then a TOML file named by
//! `RAILBIRD_CONFIG`, then `RAILBIRD_*` environment variables. Command-line
//! flags are applied last by each command.

use railbird_engine::errors::GameError;
use railbird_engine::table::{Difficulty, ShowdownRule, TableConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub bots: usize,
    pub difficulty: Difficulty,
    pub starting_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub showdown: ShowdownRule,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            seed: None,
            bots: table.num_bots,
            difficulty: table.difficulty,
            starting_chips: table.starting_chips,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
            showdown: table.showdown_rule,
        }
    }
}

impl Config {
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            num_bots: self.bots,
            starting_chips: self.starting_chips,
            difficulty: self.difficulty,
            showdown_rule: self.showdown,
            ..TableConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub bots: ValueSource,
    pub difficulty: ValueSource,
    pub starting_chips: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub showdown: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            bots: ValueSource::Default,
            difficulty: ValueSource::Default,
            starting_chips: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            showdown: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

impl From<GameError> for ConfigError {
    fn from(e: GameError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    bots: Option<usize>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    showdown: Option<String>,
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("RAILBIRD_CONFIG")
        && !path.is_empty()
    {
        let text = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&text)?;
        tracing::debug!(%path, "loaded config file");
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
        if let Some(v) = f.difficulty {
            cfg.difficulty = Difficulty::from_str(&v)?;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.showdown {
            cfg.showdown = ShowdownRule::from_str(&v)?;
            sources.showdown = ValueSource::File;
        }
    }

    if let Some(v) = env_value::<u64>("RAILBIRD_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value::<usize>("RAILBIRD_BOTS")? {
        cfg.bots = v;
        sources.bots = ValueSource::Env;
    }
    if let Some(v) = env_value::<Difficulty>("RAILBIRD_DIFFICULTY")? {
        cfg.difficulty = v;
        sources.difficulty = ValueSource::Env;
    }
    if let Some(v) = env_value::<u32>("RAILBIRD_STARTING_CHIPS")? {
        cfg.starting_chips = v;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(v) = env_value::<u32>("RAILBIRD_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_value::<u32>("RAILBIRD_BIG_BLIND")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_value::<ShowdownRule>("RAILBIRD_SHOWDOWN")? {
        cfg.showdown = v;
        sources.showdown = ValueSource::Env;
    }

    cfg.table_config().validate()?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Parses an environment variable; unset or empty means "not given".
fn env_value<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", name, raw))),
        _ => Ok(None),
    }
}
