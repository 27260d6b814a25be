//! Engine configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CHAT_LOG_LIMIT: usize = 200;

/// Engine configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON seed file with records and catalog items
    pub seed_path: Option<PathBuf>,
    /// Chat messages kept by the dice roller
    pub chat_log_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            chat_log_limit: DEFAULT_CHAT_LOG_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed_path = lookup("GEARSHEET_SEED_PATH")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let chat_log_limit = match lookup("GEARSHEET_CHAT_LOG_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("GEARSHEET_CHAT_LOG_LIMIT must be a non-negative integer")?,
            None => DEFAULT_CHAT_LOG_LIMIT,
        };

        Ok(Self {
            seed_path,
            chat_log_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn reads_seed_path_and_limit() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("GEARSHEET_SEED_PATH", "./data/seed.json"),
            ("GEARSHEET_CHAT_LOG_LIMIT", "12"),
        ]))
        .unwrap();
        assert_eq!(config.seed_path, Some(PathBuf::from("./data/seed.json")));
        assert_eq!(config.chat_log_limit, 12);
    }

    #[test]
    fn rejects_bad_limit() {
        let result = EngineConfig::from_lookup(lookup(&[("GEARSHEET_CHAT_LOG_LIMIT", "lots")]));
        assert!(result.is_err());
    }
}
