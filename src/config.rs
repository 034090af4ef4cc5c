use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error opening configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_string = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&config_string)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_keys_take_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"port": 5000, "database_url": "sqlite::memory:"}"#).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn missing_database_url_is_malformed() {
        let err = serde_json::from_str::<Config>(r#"{"port": 5000}"#).unwrap_err();
        assert!(ConfigError::from(err).to_string().starts_with("Malformed configuration"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load("/nonexistent/gigboard.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
