//! Catalog configuration.
//!
//! `catalog.toml` is optional. Every section and every key falls back to its
//! default, so an empty or missing file yields [`CatalogConfig::default`].
//!
//! ```toml
//! [paging]
//! default_page_size = 50
//!
//! [validation]
//! default_status = 422
//!
//! [actors]
//! buffer_size = 32
//! ```

use std::path::Path;

use catalog_framework::{DEFAULT_PAGE_SIZE, DEFAULT_STATUS};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {}", .0.join("; "))]
    Invalid(Vec<&'static str>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub paging: PagingConfig,
    pub validation: ValidationConfig,
    pub actors: ActorConfig,
}

impl CatalogConfig {
    /// Reads `path`, or returns the defaults when it does not exist. The result is validated.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if fs::try_exists(path).await? {
            let content = fs::read_to_string(path).await?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Validate configuration values for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.paging.default_page_size == 0 {
            errors.push("paging.default_page_size must be greater than 0");
        }
        if !(400..=599).contains(&self.validation.default_status) {
            errors.push("validation.default_status must be an HTTP error status (400-599)");
        }
        if self.actors.buffer_size == 0 {
            errors.push("actors.buffer_size must be greater than 0");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when a search carries no `limit`.
    pub default_page_size: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Status attached to rejected write requests.
    pub default_status: u16,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_status: DEFAULT_STATUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Channel capacity of every resource actor.
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}
