//! Configuration loading.
//!
//! Settings live in `<config dir>/artisan-alias/config.toml`. Every field has a
//! default, so a missing file is the same as an empty one.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AliasError, Result};

/// Primary alias used when nothing is configured.
pub const DEFAULT_ALIAS: &str = "art";

/// Environment variable that overrides the configured alias.
pub const ALIAS_ENV_VAR: &str = "ARTISAN_ALIAS";

const DEFAULT_READINESS_TIMEOUT_MS: u64 = 1000;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the primary alias (`art` -> `php artisan`)
    pub alias: String,

    /// How long to wait for a terminal's process before giving up
    pub readiness_timeout_ms: u64,

    /// Shell path used on Windows when the terminal doesn't report one
    pub windows_shell: Option<String>,

    /// Whether to clear the terminal after the aliases are set
    pub clear_after_apply: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alias: DEFAULT_ALIAS.to_string(),
            readiness_timeout_ms: DEFAULT_READINESS_TIMEOUT_MS,
            windows_shell: None,
            clear_after_apply: true,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            AliasError::Config("Could not determine config directory".to_string())
        })?;

        Ok(dir.join("artisan-alias").join("config.toml"))
    }

    /// Load from the default location, then apply the environment override.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(Self::default_path()?)?.with_env_override())
    }

    /// Apply `ARTISAN_ALIAS`, when set to something non-blank.
    pub fn with_env_override(self) -> Self {
        self.with_alias_override(env::var(ALIAS_ENV_VAR).ok())
    }

    /// Replace the alias with `alias` unless it is missing or blank.
    pub fn with_alias_override(mut self, alias: Option<String>) -> Self {
        if let Some(alias) = alias.filter(|a| !a.trim().is_empty()) {
            debug!(%alias, "alias overridden");
            self.alias = alias;
        }
        self
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        debug!(path = %path.display(), alias = %config.alias, "loaded config");

        Ok(config)
    }

    /// The primary alias, falling back to `art` when unset or blank.
    pub fn primary_alias(&self) -> &str {
        let alias = self.alias.trim();
        if alias.is_empty() {
            DEFAULT_ALIAS
        } else {
            alias
        }
    }

    pub fn readiness_timeout(&self) -> Duration {
        Duration::from_millis(self.readiness_timeout_ms)
    }
}
