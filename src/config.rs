//! Configuration management for the `jpvo` command.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// How formatting results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One tab-separated line per input.
    #[default]
    Text,
    /// A single JSON array of outcomes.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be 'text' or 'json', got: {}", other)),
        }
    }
}

/// Configuration for the `jpvo` command.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format (default: text)
    pub output: OutputFormat,

    /// Exit with a failure status when any input is rejected (default: false)
    pub fail_on_invalid: bool,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `JPVO_OUTPUT`: `text` or `json` (default: text)
    /// - `JPVO_FAIL_ON_INVALID`: `true`/`false`/`1`/`0` (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let output = match env::var("JPVO_OUTPUT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "JPVO_OUTPUT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        let fail_on_invalid = Self::parse_env_bool("JPVO_FAIL_ON_INVALID", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            output,
            fail_on_invalid,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Text,
            fail_on_invalid: false,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.fail_on_invalid);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" TEXT ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("JPVO_OUTPUT", "json");
        guard.set("JPVO_FAIL_ON_INVALID", "1");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.fail_on_invalid);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_output() {
        let mut guard = EnvGuard::new();
        guard.set("JPVO_OUTPUT", "xml");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "JPVO_OUTPUT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL", "no");

        assert!(!Config::parse_env_bool("TEST_BOOL", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_INVALID", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_INVALID", false).is_err());
    }
}
