//! Runtime configuration.
//!
//! Values come from the environment (optionally a `.env` file loaded by the
//! binary) and fall back to defaults.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Environment variable naming the log4rs config file.
pub const ENV_LOG_CONFIG: &str = "IP_VALIDATORS_LOG_CONFIG";
/// Environment variable naming the validator used when none is given.
pub const ENV_DEFAULT_VALIDATOR: &str = "IP_VALIDATORS_DEFAULT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_VALIDATOR: &str = "cidr4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub default_validator: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            default_validator: DEFAULT_VALIDATOR.to_string(),
        }
    }
}

impl Config {
    /// Build a config from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();
        Config {
            log_config: get(ENV_LOG_CONFIG)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            default_validator: get(ENV_DEFAULT_VALIDATOR).unwrap_or(defaults.default_validator),
        }
    }
}

/// Initialise log4rs from `config.log_config`, or a stderr logger at `warn`
/// if that file does not exist.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {:?}: {e}", config.log_config))?;
    } else {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
            .build();
        let log_config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(log_config)?;
    }
    log::debug!("Logging initialised with {config:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.default_validator, "cidr4");
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_LOG_CONFIG, "/etc/ip-validators/log.yml"),
            (ENV_DEFAULT_VALIDATOR, "ipv6"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.log_config, PathBuf::from("/etc/ip-validators/log.yml"));
        assert_eq!(config.default_validator, "ipv6");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }
}
