//! Implementation of the `templator init` command.
//!
//! Creates `.templates/` with a starter template and a default
//! `.templator.yaml`. Running it again leaves existing files alone.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::context::{TEMPLATES_DIR, WorkspaceContext};
use crate::error::{Result, TemplatorError};
use crate::fs::{atomic_write_file, ensure_dir};
use crate::templates::list_templates;
use tracing::info;

/// File name of the starter template.
pub(super) const STARTER_TEMPLATE_NAME: &str = "note.md";

/// Starter template written into an empty `.templates/`.
const STARTER_TEMPLATE: &str = r#"# ${title}

Created: ${date}
Workspace: ${workspaceName}

## Notes

"#;

/// Execute the `templator init` command.
pub fn cmd_init(ctx: &WorkspaceContext) -> Result<()> {
    let created = init_workspace(ctx)?;

    if created.is_empty() {
        println!("Workspace already initialized: {}", ctx.root.display());
        return Ok(());
    }

    println!("Initialized templator workspace: {}", ctx.root.display());
    println!();
    println!("Created:");
    for path in &created {
        println!("  {}", path);
    }
    println!();
    println!("Create a file with `templator create`, or a template with `templator new-template`.");

    Ok(())
}

/// Create whatever is missing; returns the workspace-relative paths created.
pub(super) fn init_workspace(ctx: &WorkspaceContext) -> Result<Vec<String>> {
    let mut created = Vec::new();

    if !ctx.templates_dir.is_dir() {
        ensure_dir(&ctx.templates_dir)?;
        created.push(format!("{}/", TEMPLATES_DIR));
    }

    let has_templates = match list_templates(ctx) {
        Ok(_) => true,
        Err(TemplatorError::NoTemplates(_)) => false,
        Err(e) => return Err(e),
    };
    if !has_templates {
        let path = ctx.templates_dir.join(STARTER_TEMPLATE_NAME);
        atomic_write_file(&path, STARTER_TEMPLATE)?;
        created.push(format!("{}/{}", TEMPLATES_DIR, STARTER_TEMPLATE_NAME));
    }

    let config_path = ctx.config_path();
    if !config_path.exists() {
        let yaml = Config::default().to_yaml()?;
        atomic_write_file(&config_path, &yaml)?;
        created.push(CONFIG_FILE_NAME.to_string());
    }

    info!(created = created.len(), "initialized workspace");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::extract_placeholders;
    use crate::templates::read_template;
    use crate::test_support::{create_test_workspace, create_workspace_with_templates};

    #[test]
    fn test_init_creates_templates_and_config() {
        let (_tmp, ctx) = create_test_workspace();

        let created = init_workspace(&ctx).unwrap();

        assert_eq!(
            created,
            vec![".templates/", ".templates/note.md", ".templator.yaml"]
        );
        assert!(ctx.templates_dir.is_dir());
        assert_eq!(ctx.load_config().unwrap(), Config::default());
    }

    #[test]
    fn test_starter_template_uses_builtins_and_title() {
        let (_tmp, ctx) = create_test_workspace();
        init_workspace(&ctx).unwrap();

        let text = read_template(&ctx, STARTER_TEMPLATE_NAME).unwrap();
        assert_eq!(
            extract_placeholders(&text),
            vec!["title", "date", "workspaceName"]
        );
    }

    #[test]
    fn test_init_is_idempotent() {
        let (_tmp, ctx) = create_test_workspace();
        init_workspace(&ctx).unwrap();

        let created = init_workspace(&ctx).unwrap();
        assert!(created.is_empty());
    }

    #[test]
    fn test_init_keeps_existing_templates_and_config() {
        let (_tmp, ctx) = create_workspace_with_templates(&[("daily.md", "# ${ISODate}")]);
        std::fs::write(ctx.config_path(), "outputFolder: journal\n").unwrap();

        let created = init_workspace(&ctx).unwrap();

        assert!(created.is_empty());
        assert!(!ctx.templates_dir.join(STARTER_TEMPLATE_NAME).exists());
        assert_eq!(ctx.load_config().unwrap().output_folder, "journal");
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_templates_dir_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let (_tmp, ctx) = create_workspace_with_templates(&[]);
        let locked = std::fs::Permissions::from_mode(0o000);
        std::fs::set_permissions(&ctx.templates_dir, locked).unwrap();

        // Privileged users can still read the directory; nothing to check then.
        if std::fs::read_dir(&ctx.templates_dir).is_ok() {
            let open = std::fs::Permissions::from_mode(0o755);
            std::fs::set_permissions(&ctx.templates_dir, open).unwrap();
            return;
        }

        let result = init_workspace(&ctx);

        let open = std::fs::Permissions::from_mode(0o755);
        std::fs::set_permissions(&ctx.templates_dir, open).unwrap();

        assert!(matches!(result, Err(TemplatorError::Io { .. })));
        assert!(!ctx.templates_dir.join(STARTER_TEMPLATE_NAME).exists());
        assert!(!ctx.config_path().exists());
    }
}
