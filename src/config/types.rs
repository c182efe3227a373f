//! Configuration constants and defaults for templator.

use serde::{Deserialize, Deserializer};

/// Name of the configuration file at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".templator.yaml";

// Default value functions for serde
pub(crate) fn default_output_folder() -> String {
    "notes".to_string()
}
pub(crate) fn default_file_extension() -> String {
    "md".to_string()
}

/// Deserialize `outputFolder`; a null or blank value falls back to the default.
pub(crate) fn output_folder_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_blank(Option::deserialize(deserializer)?).unwrap_or_else(default_output_folder))
}

/// Deserialize `defaultFileExtension`; a null or blank value falls back to the default.
pub(crate) fn file_extension_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_blank(Option::deserialize(deserializer)?).unwrap_or_else(default_file_extension))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
