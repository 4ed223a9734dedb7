use crate::error::{CardzError, Result};
use crate::index::DEFAULT_MIN_TOKEN_LEN;
use crate::search::DEFAULT_MAX_RESULTS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "config.json";

/// How new card ids are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Highest id in the forest plus one. Deleting the highest card lets its
    /// id be handed out again.
    #[default]
    MaxPlusOne,
    /// A counter persisted in the document, never reused.
    Counter,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::MaxPlusOne => f.write_str("max-plus-one"),
            IdStrategy::Counter => f.write_str("counter"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "max-plus-one" => Ok(IdStrategy::MaxPlusOne),
            "counter" => Ok(IdStrategy::Counter),
            other => Err(format!(
                "Invalid id strategy: {} (expected max-plus-one or counter)",
                other
            )),
        }
    }
}

/// Configuration for cardz, stored as config.json next to the card store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardzConfig {
    /// Upper bound on search results
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Shortest word that makes it into the search index
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Pretty-print the stored document
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_min_token_len() -> usize {
    DEFAULT_MIN_TOKEN_LEN
}

fn default_pretty() -> bool {
    true
}

impl Default for CardzConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            id_strategy: IdStrategy::default(),
            pretty: true,
        }
    }
}

pub const CONFIG_KEYS: &[&str] = &["max-results", "min-token-len", "id-strategy", "pretty"];

impl CardzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardzError::Io)?;
        let config: CardzConfig =
            serde_json::from_str(&content).map_err(CardzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CardzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardzError::Serialization)?;
        fs::write(config_path, content).map_err(CardzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max-results" => Some(self.max_results.to_string()),
            "min-token-len" => Some(self.min_token_len.to_string()),
            "id-strategy" => Some(self.id_strategy.to_string()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "max-results" => {
                self.max_results = parse_positive(key, value)?;
            }
            "min-token-len" => {
                self.min_token_len = parse_positive(key, value)?;
            }
            "id-strategy" => {
                self.id_strategy = value.parse()?;
            }
            "pretty" => {
                self.pretty = value
                    .parse()
                    .map_err(|_| format!("Invalid value for pretty: {} (expected true or false)", value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

fn parse_positive(key: &str, value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!(
            "Invalid value for {}: {} (expected a positive number)",
            key, value
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CardzConfig::default();
        assert_eq!(config.max_results, 20);
        assert_eq!(config.min_token_len, 3);
        assert_eq!(config.id_strategy, IdStrategy::MaxPlusOne);
        assert!(config.pretty);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = CardzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, CardzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = CardzConfig::default();
        config.set("id-strategy", "counter").unwrap();
        config.set("max-results", "5").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = CardzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.id_strategy, IdStrategy::Counter);
        assert_eq!(loaded.max_results, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"max_results": 7}"#).unwrap();

        let loaded = CardzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.max_results, 7);
        assert_eq!(loaded.min_token_len, DEFAULT_MIN_TOKEN_LEN);
        assert_eq!(loaded.id_strategy, IdStrategy::MaxPlusOne);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CardzConfig::default();
        assert!(config.set("max-results", "0").is_err());
        assert!(config.set("max-results", "many").is_err());
        assert!(config.set("id-strategy", "random").is_err());
        assert!(config.set("pretty", "yes").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, CardzConfig::default());
    }

    #[test]
    fn test_list_all_in_key_order() {
        let keys: Vec<_> = CardzConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS);
    }

    #[test]
    fn test_id_strategy_serializes_kebab_case() {
        let json = serde_json::to_string(&IdStrategy::MaxPlusOne).unwrap();
        assert_eq!(json, "\"max-plus-one\"");
    }
}
