//! Engine configuration, loadable from TOML. Every struct has full
//! defaults so an empty config file is valid.

pub mod defaults;
pub mod storage_config;
pub mod suggest_config;

pub use storage_config::StorageConfig;
pub use suggest_config::{ScoreWeights, SuggestConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{WeaveError, WeaveResult};

/// Top-level configuration for the Weave engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaveConfig {
    pub storage: StorageConfig,
    pub suggest: SuggestConfig,
}

impl WeaveConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> WeaveResult<Self> {
        toml::from_str(raw).map_err(|e| WeaveError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> WeaveResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| WeaveError::ConfigError {
            reason: format!("read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }
}
