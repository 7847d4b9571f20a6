use crate::errors::LogError;
use std::env;

/// Environment variable that turns on debug output for the default logger.
pub const VERBOSE_ENV: &str = "VERBOSE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Install a debug destination on stdout. Defaults to `false`.
    pub verbose: bool,
}

impl Config {
    /// Reads `VERBOSE`. Absent or unparsable values resolve to `verbose: false`.
    pub fn from_env() -> Self {
        Self::from_value(env::var(VERBOSE_ENV).ok().as_deref())
    }

    /// Like [`Config::from_env`], but an unparsable `VERBOSE` is an error.
    pub fn try_from_env() -> Result<Self, LogError> {
        match env::var(VERBOSE_ENV) {
            Ok(value) => Ok(Config {
                verbose: parse_bool(&value)?,
            }),
            Err(_) => Ok(Config::default()),
        }
    }

    pub fn from_value(value: Option<&str>) -> Self {
        Config {
            verbose: value.and_then(|v| parse_bool(v).ok()).unwrap_or(false),
        }
    }
}

impl From<bool> for Config {
    fn from(verbose: bool) -> Self {
        Config { verbose }
    }
}

pub fn parse_bool(value: &str) -> Result<bool, LogError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(LogError::InvalidBool(value.to_string())),
    }
}
