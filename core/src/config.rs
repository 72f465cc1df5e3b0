//! Dashboard configuration
//!
//! Re-exports the shared config type and loads it from an optional TOML
//! file. The file is only ever read.

use std::path::Path;

pub use impact_types::{DashboardConfig, Revision, Viewport};

use crate::error::ConfigError;

/// Extension trait for loading [`DashboardConfig`]
pub trait DashboardConfigExt: Sized {
    fn load(path: Option<&Path>) -> Result<Self, ConfigError>;
    fn from_toml_str(source: &str, path: &Path) -> Result<Self, ConfigError>;
}

impl DashboardConfigExt for DashboardConfig {
    /// Load from `path`, or return defaults when no path is given.
    fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source, path)?;
        tracing::info!(path = %path.display(), revision = ?config.revision, "loaded dashboard config");
        Ok(config)
    }

    fn from_toml_str(source: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
