//! Template store operations.
//!
//! Templates are plain `.md` files directly inside `.templates/`.

use crate::context::WorkspaceContext;
use crate::error::{Result, TemplatorError};
use crate::fs::{atomic_write_file, ensure_dir};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Extension a file needs to be listed as a template.
pub const TEMPLATE_EXTENSION: &str = "md";

/// List template file names, sorted.
///
/// # Returns
///
/// * `Err(TemplatorError::NoTemplates)` - No `.templates` directory, or no
///   `.md` files in it
pub fn list_templates(ctx: &WorkspaceContext) -> Result<Vec<String>> {
    if !ctx.templates_dir.is_dir() {
        return Err(TemplatorError::NoTemplates(
            "No .templates folder found in workspace.".to_string(),
        ));
    }

    let entries = fs::read_dir(&ctx.templates_dir).map_err(|e| {
        TemplatorError::io(
            format!(
                "failed to read templates directory '{}'",
                ctx.templates_dir.display()
            ),
            e,
        )
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| TemplatorError::io("failed to read directory entry", e))?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        return Err(TemplatorError::NoTemplates(
            "No templates found in .templates folder.".to_string(),
        ));
    }

    names.sort();
    debug!(count = names.len(), "listed templates");
    Ok(names)
}

/// Read a template's text.
pub fn read_template(ctx: &WorkspaceContext, name: &str) -> Result<String> {
    let path = template_path(ctx, name)?;
    fs::read_to_string(&path).map_err(|e| {
        TemplatorError::io(format!("failed to read template '{}'", path.display()), e)
    })
}

/// Create an empty template unless one already exists.
///
/// Returns the template path and whether it was newly created.
pub fn create_template(ctx: &WorkspaceContext, name: &str) -> Result<(PathBuf, bool)> {
    let path = template_path(ctx, name)?;
    ensure_dir(&ctx.templates_dir)?;

    if path.exists() {
        return Ok((path, false));
    }

    atomic_write_file(&path, "")?;
    Ok((path, true))
}

/// Normalize a user-supplied template name.
///
/// A name not ending in `.md` gets `.md` appended so it shows up in listings.
pub fn normalize_template_name(name: &str) -> Result<String> {
    let name = name.trim();
    validate_template_name(name)?;

    if std::path::Path::new(name).extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
        return Ok(format!("{}.{}", name, TEMPLATE_EXTENSION));
    }
    Ok(name.to_string())
}

/// Path of a template inside `.templates/`, refusing anything that escapes it.
pub fn template_path(ctx: &WorkspaceContext, name: &str) -> Result<PathBuf> {
    validate_template_name(name)?;
    Ok(ctx.templates_dir.join(name))
}

/// Reject names that are not a single plain file name.
fn validate_template_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TemplatorError::UserError(
            "template name must not be empty".to_string(),
        ));
    }

    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(TemplatorError::UserError(format!(
            "template name '{}' is not safe: contains path separators or '..'",
            name
        )));
    }

    if name.starts_with('.') {
        return Err(TemplatorError::UserError(format!(
            "template name '{}' is not safe: starts with '.'",
            name
        )));
    }

    Ok(())
}
