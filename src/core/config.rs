//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::str::FromStr;

use tracing::Level;

/// Errors raised while reading configuration values
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("LOG_LEVEL must be one of trace, debug, info, warn, error (got '{0}')")]
    InvalidLogLevel(String),

    #[error("COMPRESSION must be a boolean (got '{0}')")]
    InvalidBool(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum tracing level for server logs
    pub log_level: Level,

    /// Whether responses are compressed (brotli, gzip)
    pub compression: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            compression: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("LOG_LEVEL").ok().as_deref(),
            std::env::var("COMPRESSION").ok().as_deref(),
        )
    }

    /// Build configuration from raw values; unset values keep their defaults
    pub fn from_vars(
        log_level: Option<&str>,
        compression: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_level = match log_level {
            Some(raw) => Level::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?,
            None => defaults.log_level,
        };

        let compression = match compression {
            Some(raw) => parse_bool(raw)?,
            None => defaults.compression,
        };

        Ok(Self {
            log_level,
            compression,
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.compression);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = Config::from_vars(Some("debug"), None).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);

        let config = Config::from_vars(Some(" WARN "), None).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_vars(Some("loud"), None).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_string()));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_compression_flag() {
        assert!(!Config::from_vars(None, Some("off")).unwrap().compression);
        assert!(!Config::from_vars(None, Some("0")).unwrap().compression);
        assert!(Config::from_vars(None, Some("TRUE")).unwrap().compression);
    }

    #[test]
    fn test_invalid_compression_flag() {
        assert_eq!(
            Config::from_vars(None, Some("maybe")).unwrap_err(),
            ConfigError::InvalidBool("maybe".to_string())
        );
    }
}
