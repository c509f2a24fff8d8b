//! Runtime settings read from the environment.
//!
//! `main` loads an optional `.env` file with dotenvy before calling
//! [`Settings::from_env`], so both sources behave the same.
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `TMUA_GRADES_LOG` | `off`, `error`, `warning`, `info` | `info` |
//! | `TMUA_GRADES_LOG_FORMAT` | `text`, `json` | `text` |

use crate::error::ConfigError;

pub const LOG_LEVEL_VAR: &str = "TMUA_GRADES_LOG";
pub const LOG_FORMAT_VAR: &str = "TMUA_GRADES_LOG_FORMAT";

/// Lowest severity that still gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Off,
    Error,
    Warning,
    Info,
}

impl Verbosity {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(ConfigError::InvalidValue {
                key: LOG_LEVEL_VAR,
                value: value.to_string(),
                expected: "off, error, warning, info",
            }),
        }
    }
}

/// How log entries are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: LOG_FORMAT_VAR,
                value: value.to_string(),
                expected: "text, json",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub verbosity: Verbosity,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Info,
            log_format: LogFormat::Text,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup. Unset or blank values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            settings.verbosity = Verbosity::parse(&value)?;
        }
        if let Some(value) = lookup(LOG_FORMAT_VAR).filter(|v| !v.trim().is_empty()) {
            settings.log_format = LogFormat::parse(&value)?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.verbosity, Verbosity::Info);
        assert_eq!(settings.log_format, LogFormat::Text);
    }

    #[test]
    fn test_reads_both_variables() {
        let settings = Settings::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "Warn"),
            (LOG_FORMAT_VAR, "json"),
        ]))
        .unwrap();
        assert_eq!(settings.verbosity, Verbosity::Warning);
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_value_keeps_default() {
        let settings = Settings::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "  ")])).unwrap();
        assert_eq!(settings.verbosity, Verbosity::Info);
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "yaml")])).unwrap_err();
        assert!(err.to_string().contains(LOG_FORMAT_VAR));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Off < Verbosity::Error);
        assert!(Verbosity::Warning < Verbosity::Info);
    }
}
