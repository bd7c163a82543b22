//! Logger configuration
//!
//! Loaded from TOML when a file is given, falls back to defaults otherwise.
//! The library itself reads no environment; `with_env_overrides` exists for
//! binaries that want it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Level;

pub const LEVEL_ENV: &str = "GLOGCHECK_LEVEL";
pub const COLORS_ENV: &str = "GLOGCHECK_COLORS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level written to the console.
    pub level: Level,
    /// Wrap lines in ANSI color escapes.
    pub colors: bool,
    /// Extra directories searched when reading a caller's source line.
    pub source_roots: Vec<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            colors: true,
            source_roots: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                tracing::debug!("Loaded logger config from {}", path.display());
                config
            }
            Err(Error::Io(_)) => {
                tracing::debug!("No logger config at {} — using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {} — using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Apply `GLOGCHECK_LEVEL` and `GLOGCHECK_COLORS` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(LEVEL_ENV).ok().as_deref(),
            std::env::var(COLORS_ENV).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, level: Option<&str>, colors: Option<&str>) -> Self {
        if let Some(raw) = level {
            match raw.parse() {
                Ok(level) => self.level = level,
                Err(e) => tracing::warn!("Ignoring {}: {}", LEVEL_ENV, e),
            }
        }
        if let Some(raw) = colors {
            self.colors = raw != "0";
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_when_valid() {
        let config = LoggerConfig::default().with_overrides(Some("warning"), Some("0"));
        assert_eq!(config.level, Level::WARNING);
        assert!(!config.colors);
    }

    #[test]
    fn bad_level_override_is_ignored() {
        let config = LoggerConfig::default().with_overrides(Some("shouty"), None);
        assert_eq!(config.level, Level::INFO);
        assert!(config.colors);
    }
}
