//! Workspace context resolution for templator.
//!
//! A workspace is a single root directory. Templates live in
//! `{root}/.templates/`, configuration in `{root}/.templator.yaml`, and
//! generated files in `{root}/{outputFolder}/`.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, TemplatorError};
use std::env;
use std::path::{Path, PathBuf};

/// Directory name, relative to the workspace root, holding templates.
pub const TEMPLATES_DIR: &str = ".templates";

/// Resolved paths for one workspace. All paths are absolute.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    /// Absolute path to the workspace root.
    pub root: PathBuf,

    /// Absolute path to the templates directory (`{root}/.templates/`).
    pub templates_dir: PathBuf,
}

impl WorkspaceContext {
    /// Resolve the workspace from an explicit directory, or the current
    /// working directory when none is given.
    ///
    /// # Returns
    ///
    /// * `Ok(WorkspaceContext)` - Successfully resolved context
    /// * `Err(TemplatorError::NoWorkspace)` - The directory does not exist
    pub fn resolve(workspace: Option<&Path>) -> Result<Self> {
        match workspace {
            Some(dir) => Self::resolve_from(dir),
            None => {
                let cwd = env::current_dir().map_err(|e| {
                    TemplatorError::io("failed to get current working directory", e)
                })?;
                Self::resolve_from(cwd)
            }
        }
    }

    /// Resolve the workspace rooted at `dir`.
    pub fn resolve_from<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(TemplatorError::NoWorkspace(dir.to_path_buf()));
        }

        let root = dir
            .canonicalize()
            .map_err(|_| TemplatorError::NoWorkspace(dir.to_path_buf()))?;
        let templates_dir = root.join(TEMPLATES_DIR);

        Ok(Self {
            root,
            templates_dir,
        })
    }

    /// Final component of the workspace root, used as `workspaceName`.
    pub fn workspace_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Path to the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Load the workspace configuration (defaults when the file is absent).
    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config_path())
    }

    /// Directory generated files are written to.
    pub fn output_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.output_folder)
    }
}
