//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, TidygateError};
use globset::Glob;
use std::path::Path;

/// File name probed in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tidygate.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tidygate.yaml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TidygateError::UserError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TidygateError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run: an explicit path must load, the default
    /// file is used when present, and built-in defaults apply otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                if Path::new(DEFAULT_CONFIG_FILE).exists() {
                    Self::load(DEFAULT_CONFIG_FILE)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| TidygateError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `extensions` entries must be non-empty and have no leading dots
    /// - `ignore` globs must compile
    pub fn validate(&self) -> Result<()> {
        for ext in &self.extensions {
            if ext.trim().is_empty() {
                return Err(TidygateError::UserError(
                    "config validation failed: extensions entries must be non-empty".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(TidygateError::UserError(format!(
                    "config validation failed: extension '{}' must not start with a dot",
                    ext
                )));
            }
        }

        for pattern in &self.ignore {
            Glob::new(pattern).map_err(|e| {
                TidygateError::UserError(format!(
                    "config validation failed: invalid ignore glob '{}': {}",
                    pattern, e
                ))
            })?;
        }

        Ok(())
    }

    /// The workspace root used to relativize diagnostic paths: the configured
    /// value, else `GITHUB_WORKSPACE`, else the current directory.
    pub fn resolved_workspace_root(&self) -> String {
        if let Some(root) = &self.workspace_root {
            return root.clone();
        }
        if let Ok(root) = std::env::var("GITHUB_WORKSPACE") {
            if !root.is_empty() {
                return root;
            }
        }
        std::env::current_dir()
            .map(|dir| dir.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
