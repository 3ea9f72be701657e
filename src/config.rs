use crate::parameters::Parameters;
use log::{info, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "marine.json";
pub const CONFIG_PATH_ENV: &str = "MARINE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parameters: Parameters,
    /// Fixed seed for the random source; entropy when absent.
    pub seed: Option<u64>,
    pub frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parameters: Parameters::default(),
            seed: None,
            frame_interval_ms: 16,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(json)?;
        config.parameters = config.parameters.clamped();
        config.frame_interval_ms = config.frame_interval_ms.max(1);
        Ok(config)
    }

    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = tokio::fs::read_to_string(path).await?;
        Config::from_json(&json)
    }

    /// Loads `path`, falling back to defaults if it is missing or invalid.
    pub async fn load_or_default(path: PathBuf) -> Self {
        match Config::load(&path).await {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("{} ({}), using defaults", err, path.display());
                Config::default()
            }
        }
    }

    pub fn path_from_env() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn reads_fields_and_clamps() {
        let config = Config::from_json(
            r#"{
                "parameters": { "depth": 900, "turbidity": 0.8 },
                "seed": 42,
                "frame_interval_ms": 0
            }"#,
        )
        .unwrap();
        assert_eq!(config.parameters.depth, 200.0);
        assert_eq!(config.parameters.turbidity, 0.8);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        match Config::from_json("{ depth: ") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
