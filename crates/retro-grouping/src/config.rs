//! Tunables for the drop planner.
//!
//! Loaded from TOML or JSON at startup:
//!
//! ```toml
//! # grouping.toml
//! default_group_title = "Untitled group"
//! rebalance_threshold = 1e-9
//! ```
//!
//! Every field has a default, so a partial file (or no file) is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default title given to a group created by dropping one idea on another.
pub const DEFAULT_GROUP_TITLE: &str = "New Group";

/// Default gap at or below which a context is flagged for rebalancing.
pub const DEFAULT_REBALANCE_THRESHOLD: f64 = 1e-9;

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Title for groups created by a `create-group` drop.
    pub default_group_title: String,
    /// Smallest acceptable gap between adjacent orders in one context.
    pub rebalance_threshold: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            default_group_title: DEFAULT_GROUP_TITLE.to_owned(),
            rebalance_threshold: DEFAULT_REBALANCE_THRESHOLD,
        }
    }
}

impl GroupingConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.checked()
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.default_group_title.trim().is_empty() {
            errors.push("default_group_title must not be blank".into());
        }

        if !self.rebalance_threshold.is_finite() || self.rebalance_threshold <= 0.0 {
            errors.push(format!(
                "rebalance_threshold must be finite and > 0, got {}",
                self.rebalance_threshold
            ));
        }

        errors
    }

    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
