//! Startup configuration for the shared registry cache
//!
//! ```toml
//! [metrics]
//! default_registry = "app"
//! preload = ["http", "db"]
//! ```
//!
//! The `[metrics]` header is optional. The default registry name can also be
//! supplied through `SHAREMETRICS_DEFAULT_REGISTRY`, which wins over the file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the default registry name
pub const ENV_DEFAULT_REGISTRY: &str = "SHAREMETRICS_DEFAULT_REGISTRY";

/// Name of the TOML section holding this config
pub const CONFIG_SECTION: &str = "metrics";

/// Shared registry cache configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedRegistriesConfig {
    /// Registry installed as the process default, if any
    #[serde(default)]
    pub default_registry: Option<String>,

    /// Registries created up front
    #[serde(default)]
    pub preload: Vec<String>,
}

impl SharedRegistriesConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(content)?;
        let config: Self = match table.remove(CONFIG_SECTION) {
            Some(section) => section.try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loaded metrics config");
        Self::from_toml_str(&content)
    }

    /// Apply `SHAREMETRICS_DEFAULT_REGISTRY` if it is set and non-empty
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_default_override(std::env::var(ENV_DEFAULT_REGISTRY).ok())
    }

    fn with_default_override(mut self, value: Option<String>) -> Self {
        if let Some(name) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            debug!(registry = %name, "Default registry overridden from environment");
            self.default_registry = Some(name);
        }
        self
    }

    /// Reject blank registry names
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.default_registry {
            if name.trim().is_empty() {
                return Err(Error::InvalidConfig {
                    field: "default_registry".to_string(),
                    message: "registry names must not be empty".to_string(),
                });
            }
        }

        if self.preload.iter().any(|name| name.trim().is_empty()) {
            return Err(Error::InvalidConfig {
                field: "preload".to_string(),
                message: "registry names must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
