//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for template materialization.
///
/// This struct represents the contents of `<workspace>/.templator.yaml`.
/// Keys are camelCase. Unknown fields in the YAML are ignored for forward
/// compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Static variables available to every template.
    ///
    /// These override the built-ins and are overridden by per-invocation values.
    pub variables: BTreeMap<String, String>,

    /// Folder, relative to the workspace root, where generated files land.
    /// Left empty, it falls back to `notes`.
    #[serde(
        default = "default_output_folder",
        deserialize_with = "output_folder_or_default"
    )]
    pub output_folder: String,

    /// Extension (no leading dot) given to generated files.
    /// Left empty, it falls back to `md`.
    #[serde(
        default = "default_file_extension",
        deserialize_with = "file_extension_or_default"
    )]
    pub default_file_extension: String,

    /// Whether to emit a notice after a file is created from a template.
    pub show_notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variables: BTreeMap::new(),
            output_folder: default_output_folder(),
            default_file_extension: default_file_extension(),
            show_notifications: false,
        }
    }
}
