use crate::context::WorkspaceContext;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The process working directory is global; hold the lock even if a
        // #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Empty workspace with no `.templates` directory.
pub(crate) fn create_test_workspace() -> (TempDir, WorkspaceContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WorkspaceContext::resolve_from(temp_dir.path()).unwrap();
    (temp_dir, ctx)
}

/// Workspace whose `.templates` holds the given `(name, content)` files.
pub(crate) fn create_workspace_with_templates(
    templates: &[(&str, &str)],
) -> (TempDir, WorkspaceContext) {
    let (temp_dir, ctx) = create_test_workspace();
    std::fs::create_dir_all(&ctx.templates_dir).unwrap();
    for (name, content) in templates {
        std::fs::write(ctx.templates_dir.join(name), content).unwrap();
    }
    (temp_dir, ctx)
}

/// Write the workspace config file.
pub(crate) fn write_config(ctx: &WorkspaceContext, yaml: &str) {
    std::fs::write(ctx.config_path(), yaml).unwrap();
}
