use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

const APP_DIR: &str = "bank_core";
const CONFIG_FILE: &str = "config.json";

/// Failures while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Shell preferences and signup defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// BCP 47 tag applied to accounts opened through signup.
    pub locale: String,
    /// ISO 4217 code applied to accounts opened through signup.
    pub currency: String,
    /// Seconds of shell inactivity before a session is dropped.
    pub session_timeout_secs: u64,
    /// Annual interest rate, in percent, for newly opened accounts.
    pub signup_interest_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            session_timeout_secs: 300,
            signup_interest_rate: 1.2,
        }
    }
}

/// Loads and saves the configuration under the platform config directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_base_dir(base.join(APP_DIR))
    }

    /// Points the manager at an explicit directory; tests use a temp dir.
    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Reads the config file, falling back to defaults when absent.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path());
        assert_eq!(manager.load().expect("load"), Config::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path());
        let config = Config {
            locale: "pt-PT".into(),
            currency: "EUR".into(),
            session_timeout_secs: 60,
            signup_interest_rate: 1.5,
        };
        manager.save(&config).expect("save");
        assert_eq!(manager.load().expect("load"), config);
    }
}
