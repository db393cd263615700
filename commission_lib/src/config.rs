//! Runtime configuration: built-in defaults, an optional TOML file, then
//! `COMMISSION_*` environment variables, each layer overriding the last.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::draft::DraftDefaults;
use crate::store::DEFAULT_STORAGE_KEY;

pub const ENV_DB: &str = "COMMISSION_DB";
pub const ENV_STORAGE_KEY: &str = "COMMISSION_STORAGE_KEY";
pub const ENV_DEFAULT_RATE: &str = "COMMISSION_DEFAULT_RATE";
pub const ENV_DEFAULT_SPLIT: &str = "COMMISSION_DEFAULT_SPLIT";
pub const ENV_DEFAULT_FEES: &str = "COMMISSION_DEFAULT_FEES";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// SQLite file holding the deal collection.
    pub db_path: PathBuf,
    /// Key the collection is stored under.
    pub storage_key: String,
    /// Commission rate (percent) pre-filled on new deals.
    pub default_rate: f64,
    /// Broker split (percent) pre-filled on new deals.
    pub default_split: f64,
    /// Flat fees pre-filled on new deals.
    pub default_fees: f64,
}

impl Default for Config {
    fn default() -> Self {
        let draft = DraftDefaults::default();
        Self {
            db_path: PathBuf::from("deals.db"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_rate: draft.commission_rate,
            default_split: draft.broker_split,
            default_fees: draft.fees,
        }
    }
}

impl Config {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults, overlaid with `path` when given, overlaid with the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Overlay values from `lookup` (normally the environment). Values that
    /// are missing or fail to parse leave the current setting alone.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_DB).filter(|v| !v.trim().is_empty()) {
            self.db_path = PathBuf::from(path);
        }
        if let Some(key) = lookup(ENV_STORAGE_KEY).filter(|v| !v.trim().is_empty()) {
            self.storage_key = key;
        }
        self.default_rate = env_f64(&lookup, ENV_DEFAULT_RATE, self.default_rate);
        self.default_split = env_f64(&lookup, ENV_DEFAULT_SPLIT, self.default_split);
        self.default_fees = env_f64(&lookup, ENV_DEFAULT_FEES, self.default_fees);
    }

    /// Pre-fill values for a new draft.
    pub fn draft_defaults(&self) -> DraftDefaults {
        DraftDefaults {
            commission_rate: self.default_rate,
            broker_split: self.default_split,
            fees: self.default_fees,
        }
    }
}

fn env_f64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
    lookup(key)
        .and_then(|val| val.trim().parse::<f64>().ok())
        .filter(|val| val.is_finite())
        .unwrap_or(default)
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from("deals.db"));
        assert_eq!(config.storage_key, "realtor_commission_deals");
        assert_eq!(config.default_rate, 3.0);
        assert_eq!(config.default_split, 20.0);
        assert_eq!(config.default_fees, 0.0);
    }

    #[test]
    fn test_toml_partial() {
        let config = Config::from_toml_str(
            r#"
            db_path = "/tmp/my-deals.db"
            default_rate = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/my-deals.db"));
        assert_eq!(config.default_rate, 2.5);
        assert_eq!(config.default_split, 20.0);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        assert!(Config::from_toml_str("currency = \"EUR\"").is_err());
    }

    #[test]
    fn test_toml_rejects_bad_types() {
        let err = Config::from_toml_str("default_rate = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            (ENV_DB, "/var/lib/deals.db"),
            (ENV_STORAGE_KEY, "team_deals"),
            (ENV_DEFAULT_RATE, "2.75"),
            (ENV_DEFAULT_SPLIT, " 30 "),
            (ENV_DEFAULT_FEES, "395"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/var/lib/deals.db"));
        assert_eq!(config.storage_key, "team_deals");
        assert_eq!(config.default_rate, 2.75);
        assert_eq!(config.default_split, 30.0);
        assert_eq!(config.default_fees, 395.0);
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            (ENV_DB, "  "),
            (ENV_DEFAULT_RATE, "lots"),
            (ENV_DEFAULT_SPLIT, "NaN"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_draft_defaults_follow_config() {
        let config = Config {
            default_rate: 2.5,
            default_split: 25.0,
            default_fees: 150.0,
            ..Config::default()
        };
        let defaults = config.draft_defaults();
        assert_eq!(defaults.commission_rate, 2.5);
        assert_eq!(defaults.broker_split, 25.0);
        assert_eq!(defaults.fees, 150.0);
    }
}
