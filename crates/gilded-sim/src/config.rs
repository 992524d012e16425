//! Simulation configuration.
//!
//! Loaded from environment variables with fallback to defaults, then
//! overridden by command line flags.
//!
//! ## Sources (Priority Order)
//! 1. Command line flags (`--days`, `--rules`, `--format`)
//! 2. Environment variables (`GILDED_*`)
//! 3. Defaults (this file)

use std::env;
use std::str::FromStr;

use gilded_core::RuleSet;
use serde::{Deserialize, Serialize};

/// Default number of days to simulate.
pub const DEFAULT_DAYS: u64 = 2;

pub const HELP: &str = "\
Gilded Rose Inventory Simulator

Usage: gilded-sim [OPTIONS]

Options:
  -d, --days <N>         Number of days to simulate (default: 2)
  -r, --rules <NAME>     Rule set: revised | legacy (default: revised)
  -f, --format <FORMAT>  Output format: text | json (default: text)
  -h, --help             Show this help message

Environment:
  GILDED_DAYS, GILDED_RULE_SET, GILDED_FORMAT   Same as the flags above
  RUST_LOG                                      Log filter (default: info)";

/// How snapshots are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `name, sellIn, quality` listing per day.
    #[default]
    Text,
    /// One JSON object per day.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("format".to_string())),
        }
    }
}

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Days to simulate
    pub days: u64,

    /// Rules used to age items
    pub rule_set: RuleSet,

    /// Output format
    pub format: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            rule_set: RuleSet::default(),
            format: OutputFormat::default(),
        }
    }
}

/// What the binary should do after reading its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(SimConfig),
    Help,
}

impl SimConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            days: match lookup("GILDED_DAYS") {
                Some(raw) => parse_days("GILDED_DAYS", &raw)?,
                None => defaults.days,
            },

            rule_set: match lookup("GILDED_RULE_SET") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("GILDED_RULE_SET".to_string()))?,
                None => defaults.rule_set,
            },

            format: match lookup("GILDED_FORMAT") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("GILDED_FORMAT".to_string()))?,
                None => defaults.format,
            },
        })
    }

    /// Apply command line flags on top of this configuration.
    ///
    /// `args` excludes the program name.
    pub fn apply_args(mut self, args: &[String]) -> Result<Command, ConfigError> {
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--help" | "-h" => return Ok(Command::Help),
                "--days" | "-d" | "--rules" | "-r" | "--format" | "-f" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
                    match flag {
                        "--days" | "-d" => self.days = parse_days(flag, value)?,
                        "--rules" | "-r" => {
                            self.rule_set = value
                                .parse()
                                .map_err(|_| ConfigError::InvalidValue(flag.to_string()))?;
                        }
                        _ => {
                            self.format = value
                                .parse()
                                .map_err(|_| ConfigError::InvalidValue(flag.to_string()))?;
                        }
                    }
                    i += 1;
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
            i += 1;
        }

        Ok(Command::Run(self))
    }
}

fn parse_days(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0} (see --help)")]
    UnknownArgument(String),
}
