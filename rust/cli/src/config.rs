//! Layered table configuration.
//!
//! Values resolve as defaults → TOML file named by `BLACKJACK_CONFIG` →
//! `BLACKJACK_*` environment variables. Command-line flags are applied on
//! top by the commands themselves.

use std::fs;

use blackjack_engine::engine::TableRules;
use blackjack_engine::ledger::STARTING_BALANCE;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "BLACKJACK_CONFIG";
pub const SEED_ENV: &str = "BLACKJACK_SEED";
pub const STARTING_BALANCE_ENV: &str = "BLACKJACK_STARTING_BALANCE";
pub const MIN_BET_ENV: &str = "BLACKJACK_MIN_BET";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u64,
    pub min_bet: u64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let rules = TableRules::default();
        Self {
            starting_balance: STARTING_BALANCE,
            min_bet: rules.min_bet,
            seed: None,
        }
    }
}

impl Config {
    pub fn table_rules(&self) -> TableRules {
        TableRules {
            starting_balance: self.starting_balance,
            min_bet: self.min_bet,
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub min_bet: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            min_bet: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line overrides and re-checks the result.
    pub fn with_overrides(
        mut self,
        starting_balance: Option<u64>,
        min_bet: Option<u64>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = starting_balance {
            self.config.starting_balance = v;
            self.sources.starting_balance = ValueSource::Cli;
        }
        if let Some(v) = min_bet {
            self.config.min_bet = v;
            self.sources.min_bet = ValueSource::Cli;
        }
        if let Some(v) = seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.min_bet {
            cfg.min_bet = v;
            sources.min_bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = env_u64(SEED_ENV)? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_u64(STARTING_BALANCE_ENV)? {
        cfg.starting_balance = v;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(v) = env_u64(MIN_BET_ENV)? {
        cfg.min_bet = v;
        sources.min_bet = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, v))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u64>,
    #[serde(default)]
    min_bet: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must be >0".into(),
        ));
    }
    if cfg.min_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_bet must be >0".into(),
        ));
    }
    if cfg.min_bet > cfg.starting_balance {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_bet must not exceed starting_balance".into(),
        ));
    }
    Ok(())
}
