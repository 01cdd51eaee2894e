//! Configuration structures for the detector.
//!
//! This module provides strongly-typed configuration management using TOML files.
//! Every section is optional; anything left out takes its default value.
//!
//! ```toml
//! [batch]
//! max_messages = 50
//! min_message_chars = 5
//! preview_chars = 100
//!
//! [keywords]
//! stress = ["stress", "pressure", "deadline"]
//!
//! [recommendations]
//! quote_seed = 42
//!
//! [logging]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::emotion::keywords::{DEPRESSION_KEYWORDS, POSITIVE_KEYWORDS, STRESS_KEYWORDS};
use crate::emotion::{KeywordSet, KeywordSets};
use crate::error::Result;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "psywell.toml";

/// Main configuration structure loaded from `psywell.toml`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Batch limits
    pub batch: BatchConfig,
    /// Keyword list overrides
    pub keywords: KeywordConfig,
    /// Recommendation settings
    pub recommendations: RecommendationConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Batch processing limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Messages beyond this count are ignored
    pub max_messages: usize,
    /// Messages with this many characters or fewer (after trimming) are skipped
    pub min_message_chars: usize,
    /// Length of the message preview kept in each record
    pub preview_chars: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            max_messages: 50,
            min_message_chars: 5,
            preview_chars: 100,
        }
    }
}

/// Keyword lists; each defaults to the built-in list for its category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub stress: Vec<String>,
    pub depression: Vec<String>,
    pub positive: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        KeywordConfig {
            stress: owned(STRESS_KEYWORDS),
            depression: owned(DEPRESSION_KEYWORDS),
            positive: owned(POSITIVE_KEYWORDS),
        }
    }
}

impl KeywordConfig {
    pub fn to_keyword_sets(&self) -> KeywordSets {
        KeywordSets::new(
            KeywordSet::new(&self.stress),
            KeywordSet::new(&self.depression),
            KeywordSet::new(&self.positive),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Fixed seed for quote selection; random when absent
    pub quote_seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// Returns `Ok(Config)` if successful, or an error if the file cannot be read
    /// or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
