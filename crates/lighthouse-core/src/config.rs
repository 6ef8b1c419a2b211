//! Runtime configuration
//!
//! Loaded from TOML, then optionally overridden from the environment:
//!
//! ```toml
//! profile = "production"
//! language = "ru"
//! log_level = "deep_debug"
//! response_level = 4
//! ```

use std::path::Path;

use lighthouse_core_types::lang;
use serde::{Deserialize, Serialize};

use crate::errors::{LighthouseError, Result};
use crate::level::Level;
use crate::logging_facility::Profile;

pub const ENV_PROFILE: &str = "LIGHTHOUSE_PROFILE";
pub const ENV_LANG: &str = "LIGHTHOUSE_LANG";
pub const ENV_LOG_LEVEL: &str = "LIGHTHOUSE_LOG_LEVEL";
pub const ENV_RESPONSE_LEVEL: &str = "LIGHTHOUSE_RESPONSE_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LighthouseConfig {
    pub profile: Profile,
    /// Language for rendered messages; English is the fallback
    pub language: String,
    /// Disclosure budget for logs
    pub log_level: Level,
    /// Disclosure budget for anything shown to users
    pub response_level: Level,
}

impl Default for LighthouseConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Development,
            language: lang::EN.to_string(),
            log_level: Level::DeepDebug,
            response_level: Level::HighDebug,
        }
    }
}

impl LighthouseConfig {
    /// Parse a TOML document; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns `LighthouseError::Config` on malformed TOML, unknown keys,
    /// unknown levels or an empty language.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns `LighthouseError::Io` if the file cannot be read, otherwise
    /// as [`LighthouseConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Apply `LIGHTHOUSE_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `LighthouseError::Config` if a set variable holds an invalid value.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `LighthouseError::Config` if a present value is invalid.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(profile) = lookup(ENV_PROFILE) {
            self.profile = profile.parse()?;
        }
        if let Some(language) = lookup(ENV_LANG) {
            self.language = language.trim().to_ascii_lowercase();
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = parse_level(ENV_LOG_LEVEL, &level)?;
        }
        if let Some(level) = lookup(ENV_RESPONSE_LEVEL) {
            self.response_level = parse_level(ENV_RESPONSE_LEVEL, &level)?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.language.is_empty() {
            return Err(LighthouseError::Config {
                message: "language must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_level(key: &str, value: &str) -> Result<Level> {
    value.parse().map_err(|err: LighthouseError| LighthouseError::Config {
        message: format!("{}: {}", key, err),
    })
}
