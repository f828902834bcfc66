// File: src/config.rs
// Purpose: Rule options parsed from a TOML file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::payment::is_valid_card_expiry_year;
use crate::value::Value;

/// Rule configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub payment: PaymentConfig,

    #[serde(default)]
    pub timezone: TimezoneConfig,
}

/// Payment field options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Digits in a card expiry year (2 for "27", 4 for "2027")
    #[serde(default = "default_expiry_year_length")]
    pub expiry_year_length: usize,
}

/// Timezone lookup options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneConfig {
    /// Accept `europe/istanbul` for `Europe/Istanbul` (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

// Default values
fn default_expiry_year_length() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            expiry_year_length: default_expiry_year_length(),
        }
    }
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            case_insensitive: default_true(),
        }
    }
}

impl PaymentConfig {
    /// Expiry-year check using the configured year length
    pub fn is_valid_expiry_year(&self, value: &Value) -> bool {
        is_valid_card_expiry_year(value, self.expiry_year_length)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!("Loaded rule config from {}", path.display());
        Ok(config)
    }

    /// Load from the file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML config")?;

        if config.payment.expiry_year_length == 0 {
            anyhow::bail!("payment.expiry_year_length must be greater than zero");
        }

        Ok(config)
    }
}
