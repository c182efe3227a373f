//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, TemplatorError};
use std::path::{Component, Path};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// A missing file is not an error: the defaults are returned.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Loaded and validated config, or the defaults
    /// * `Err(TemplatorError::UserError)` - Parse error or validation failure
    /// * `Err(TemplatorError::Io)` - The file exists but could not be read
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            TemplatorError::io(format!("failed to read config file '{}'", path.display()), e)
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            TemplatorError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TemplatorError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `outputFolder` must be a non-empty relative path without `..`
    /// - `defaultFileExtension` must be non-empty, without a leading dot or separators
    /// - variable names must be word characters only
    pub fn validate(&self) -> Result<()> {
        let folder = Path::new(&self.output_folder);
        if self.output_folder.trim().is_empty() {
            return Err(TemplatorError::UserError(
                "config validation failed: outputFolder must not be empty".to_string(),
            ));
        }
        if folder.is_absolute()
            || folder
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(TemplatorError::UserError(format!(
                "config validation failed: outputFolder must stay inside the workspace (found '{}')",
                self.output_folder
            )));
        }

        let ext = &self.default_file_extension;
        if ext.is_empty() {
            return Err(TemplatorError::UserError(
                "config validation failed: defaultFileExtension must be non-empty".to_string(),
            ));
        }
        if ext.starts_with('.') {
            return Err(TemplatorError::UserError(format!(
                "config validation failed: defaultFileExtension must not have a leading dot (found '{}'). Use '{}' instead.",
                ext,
                ext.trim_start_matches('.')
            )));
        }
        if ext.contains('/') || ext.contains('\\') {
            return Err(TemplatorError::UserError(format!(
                "config validation failed: defaultFileExtension must not contain path separators (found '{}')",
                ext
            )));
        }

        for name in self.variables.keys() {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(TemplatorError::UserError(format!(
                    "config validation failed: variable name '{}' must contain only letters, digits, and underscores",
                    name
                )));
            }
        }

        Ok(())
    }
}
