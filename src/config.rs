//! Runtime configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URI` | `studypath.db` in the platform data directory |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `7860` |
//! | `GOOGLE_API_KEY` | unset (chat replies with a fixed notice) |
//! | `STUDYPATH_GEMINI_MODEL` | `gemini-1.5-flash` |
//! | `STUDYPATH_SIMULATED_DELAY_MS` | `2000` |
//! | `STUDYPATH_CHAT_TIMEOUT_SECS` | `30` |
//! | `STUDYPATH_RECOMMENDER_MODEL` | unset (built-in major table) |
//!
//! The binary loads a `.env` file from the working directory before reading
//! these, so values there apply to logging as well.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7860;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported DATABASE_URI (expected sqlite:///path or a file path): {0}")]
    UnsupportedDatabaseUri(String),

    #[error("invalid {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Platform data directory.
    Default,
    Memory,
    File(PathBuf),
}

impl DatabaseLocation {
    /// Parse a `DATABASE_URI` value.
    ///
    /// Accepts `sqlite:///relative.db`, `sqlite:////absolute.db`, `:memory:`
    /// (bare or behind the `sqlite:///` prefix) and plain file paths.
    pub fn parse(uri: &str) -> Result<Self, ConfigError> {
        let uri = uri.trim();
        let path = match uri.strip_prefix("sqlite:///") {
            Some(rest) => rest,
            None if uri == "sqlite://" => return Ok(Self::Memory),
            None if uri.contains("://") => {
                return Err(ConfigError::UnsupportedDatabaseUri(uri.to_string()))
            }
            None => uri,
        };

        match path {
            "" | ":memory:" => Ok(Self::Memory),
            p => Ok(Self::File(PathBuf::from(p))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseLocation,
    pub host: String,
    pub port: u16,
    /// Key for the hosted chat model. Chat is disabled without it.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    /// Upper bound on a single chat model request.
    pub chat_timeout: Duration,
    /// Artificial wait before a generated roadmap or course plan is shown.
    pub simulated_delay: Duration,
    /// JSON file holding the major to course table.
    pub recommender_model: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseLocation::Default,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            google_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            chat_timeout: DEFAULT_CHAT_TIMEOUT,
            simulated_delay: DEFAULT_SIMULATED_DELAY,
            recommender_model: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let database = match get("DATABASE_URI") {
            Some(uri) => DatabaseLocation::parse(&uri)?,
            None => defaults.database,
        };

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value })?,
            None => defaults.port,
        };

        let simulated_delay = match get("STUDYPATH_SIMULATED_DELAY_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "STUDYPATH_SIMULATED_DELAY_MS",
                    value,
                })?,
            None => defaults.simulated_delay,
        };

        let chat_timeout = match get("STUDYPATH_CHAT_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "STUDYPATH_CHAT_TIMEOUT_SECS",
                    value,
                })?,
            None => defaults.chat_timeout,
        };

        Ok(Self {
            database,
            host: get("HOST").unwrap_or(defaults.host),
            port,
            google_api_key: get("GOOGLE_API_KEY"),
            gemini_model: get("STUDYPATH_GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            chat_timeout,
            simulated_delay,
            recommender_model: get("STUDYPATH_RECOMMENDER_MODEL").map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database, DatabaseLocation::Default);
        assert_eq!(config.bind_address(), "0.0.0.0:7860");
        assert!(config.google_api_key.is_none());
        assert_eq!(config.simulated_delay, Duration::from_secs(2));
        assert_eq!(config.chat_timeout, DEFAULT_CHAT_TIMEOUT);
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("DATABASE_URI", "sqlite:///data/studypath.db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("GOOGLE_API_KEY", "secret"),
            ("STUDYPATH_SIMULATED_DELAY_MS", "1500"),
            ("STUDYPATH_CHAT_TIMEOUT_SECS", "5"),
            ("STUDYPATH_RECOMMENDER_MODEL", "models/recommender.json"),
        ])
        .unwrap();

        assert_eq!(
            config.database,
            DatabaseLocation::File(PathBuf::from("data/studypath.db"))
        );
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.google_api_key.as_deref(), Some("secret"));
        assert_eq!(config.simulated_delay, Duration::from_millis(1500));
        assert_eq!(config.chat_timeout, Duration::from_secs(5));
        assert_eq!(
            config.recommender_model,
            Some(PathBuf::from("models/recommender.json"))
        );
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = config_from(&[("GOOGLE_API_KEY", "  "), ("PORT", "")]).unwrap();
        assert!(config.google_api_key.is_none());
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn rejects_invalid_port() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "PORT",
                value: "http".to_string()
            }
        );
    }

    #[test]
    fn parses_database_uris() {
        assert_eq!(
            DatabaseLocation::parse("sqlite:////var/lib/studypath.db").unwrap(),
            DatabaseLocation::File(PathBuf::from("/var/lib/studypath.db"))
        );
        assert_eq!(
            DatabaseLocation::parse("plain.db").unwrap(),
            DatabaseLocation::File(PathBuf::from("plain.db"))
        );
        assert_eq!(DatabaseLocation::parse(":memory:").unwrap(), DatabaseLocation::Memory);
        assert_eq!(
            DatabaseLocation::parse("sqlite:///:memory:").unwrap(),
            DatabaseLocation::Memory
        );
        assert!(matches!(
            DatabaseLocation::parse("postgres://localhost/db"),
            Err(ConfigError::UnsupportedDatabaseUri(_))
        ));
    }
}
