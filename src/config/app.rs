use std::path::Path;
use std::sync::OnceLock;

use coset::Algorithm;
use serde::Deserialize;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use super::defaults::*;
use crate::algo::parse_algorithm;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::enums::MessageTag;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub algorithms: Algorithms,
}

/// Algorithm names or IANA ids, one per message family
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Algorithms {
    #[serde(default = "default_sign")]
    pub sign: String,
    #[serde(default = "default_sign")]
    pub sign1: String,
    #[serde(default = "default_encrypt")]
    pub encrypt: String,
    #[serde(default = "default_encrypt")]
    pub encrypt0: String,
    #[serde(default = "default_mac")]
    pub mac: String,
    #[serde(default = "default_mac")]
    pub mac0: String,
}

impl Default for Algorithms {
    fn default() -> Self {
        default_algorithms()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn algorithm_name_for(&self, tag: MessageTag) -> &str {
        let a = &self.algorithms;
        match tag {
            MessageTag::Sign => &a.sign,
            MessageTag::Sign1 => &a.sign1,
            MessageTag::Encrypt => &a.encrypt,
            MessageTag::Encrypt0 => &a.encrypt0,
            MessageTag::Mac => &a.mac,
            MessageTag::Mac0 => &a.mac0,
        }
    }

    /// Configured algorithm for a message family, resolved through the registry
    pub fn algorithm_for(&self, tag: MessageTag) -> Result<Algorithm> {
        parse_algorithm(self.algorithm_name_for(tag))
    }

    /// Checks that every configured algorithm resolves
    pub fn validate(&self) -> Result<()> {
        for tag in MessageTag::ALL {
            self.algorithm_for(tag)?;
        }
        Ok(())
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide config, read once. Falls back to defaults if the file is
/// missing or invalid.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if !Path::new(&config_path).exists() {
            #[cfg(feature = "logging")]
            debug!(path = %config_path, "no config file, using built-in defaults");
            return Config::default();
        }

        match Config::from_path(&config_path).and_then(|conf| conf.validate().map(|()| conf)) {
            Ok(conf) => {
                #[cfg(feature = "logging")]
                debug!(path = %config_path, "loaded COSE context config");
                conf
            }
            Err(_err) => {
                #[cfg(feature = "logging")]
                warn!(
                    path = %config_path,
                    error = %_err,
                    "invalid config, using built-in defaults"
                );
                Config::default()
            }
        }
    })
}
