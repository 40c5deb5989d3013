use serde::{Deserialize, Serialize};
use std::path::Path;

use dex_types::constants::DEFAULT_BECH32_PREFIX;

use crate::address::Bech32Codec;
use crate::error::WhitelistError;
use crate::logging;
use crate::whitelist::Whitelist;

/// Name of the config file written by [`WhitelistConfig::init`].
pub const CONFIG_FILE_NAME: &str = "whitelist.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhitelistConfig {
    /// Bech32 human-readable part expected on every contract address.
    #[serde(default = "default_bech32_prefix")]
    pub bech32_prefix: String,
    /// Whitelisted contract addresses, in priority order.
    #[serde(default)]
    pub contracts: Vec<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_bech32_prefix() -> String {
    DEFAULT_BECH32_PREFIX.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self {
            bech32_prefix: default_bech32_prefix(),
            contracts: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl WhitelistConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, WhitelistError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| WhitelistError::ConfigError {
                reason: format!("failed to read config file '{}': {}", path, e),
            })?;
        Self::from_toml(&contents).map_err(|e| match e {
            WhitelistError::ConfigError { reason } => WhitelistError::ConfigError {
                reason: format!("config file '{}': {}", path, reason),
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, WhitelistError> {
        toml::from_str(contents).map_err(|e| WhitelistError::ConfigError {
            reason: format!("failed to parse config: {}", e),
        })
    }

    /// Write a default configuration file into `dir`, creating it if needed.
    pub fn init(dir: &str) -> Result<(), WhitelistError> {
        let dir_path = Path::new(dir);
        if !dir_path.exists() {
            std::fs::create_dir_all(dir_path)?;
        }

        let config = WhitelistConfig::default();
        let toml_str = toml::to_string_pretty(&config).map_err(|e| WhitelistError::ConfigError {
            reason: format!("failed to serialize default config: {}", e),
        })?;

        std::fs::write(dir_path.join(CONFIG_FILE_NAME), toml_str)?;
        Ok(())
    }

    pub fn codec(&self) -> Bech32Codec {
        Bech32Codec::new(self.bech32_prefix.as_str())
    }

    /// Decode the configured contracts into a whitelist.
    pub fn build_whitelist(&self) -> Result<Whitelist, WhitelistError> {
        Whitelist::from_addresses(&self.codec(), self.contracts.as_slice())
    }

    /// Install the global subscriber at `logging.level`. A bad level is
    /// reported before anything is installed.
    pub fn init_logging(&self) -> Result<(), WhitelistError> {
        logging::env_filter(&self.logging.level)?;
        logging::init(&self.logging.level)
    }
}
