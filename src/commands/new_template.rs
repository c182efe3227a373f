//! Implementation of the `templator new-template` command.
//!
//! Creates an empty template in `.templates/` (creating the folder if
//! needed) and opens it for editing.

use crate::cli::NewTemplateArgs;
use crate::context::WorkspaceContext;
use crate::error::{Result, TemplatorError};
use crate::fs::ensure_dir;
use crate::interaction::{Interaction, NoticeLevel};
use crate::templates::{create_template, normalize_template_name};
use std::path::PathBuf;
use tracing::info;

/// Execute the `templator new-template` command.
///
/// Returns the template path. An existing template is opened unchanged.
pub fn cmd_new_template(
    ctx: &WorkspaceContext,
    args: NewTemplateArgs,
    ui: &mut dyn Interaction,
) -> Result<PathBuf> {
    ensure_dir(&ctx.templates_dir)?;

    let raw_name = match args.name {
        Some(name) => name,
        None => ui
            .prompt_text("Enter new template name (e.g., meeting_minutes.md)")?
            .ok_or(TemplatorError::Cancelled)?,
    };
    if raw_name.trim().is_empty() {
        return Err(TemplatorError::Cancelled);
    }

    let name = normalize_template_name(&raw_name)?;
    let (path, created) = create_template(ctx, &name)?;

    if created {
        info!(template = %name, "created template");
        ui.notify(NoticeLevel::Info, &format!("Created {} in .templates", name));
    }

    ui.open_document(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ScriptedInteraction;
    use crate::test_support::{create_test_workspace, create_workspace_with_templates};

    #[test]
    fn test_creates_named_template_and_opens_it() {
        let (_tmp, ctx) = create_test_workspace();
        let mut ui = ScriptedInteraction::new();

        let args = NewTemplateArgs {
            name: Some("meeting_minutes.md".to_string()),
        };
        let path = cmd_new_template(&ctx, args, &mut ui).unwrap();

        assert_eq!(path, ctx.templates_dir.join("meeting_minutes.md"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        assert_eq!(ui.opened, vec![path]);
        assert_eq!(
            ui.notices_at(NoticeLevel::Info),
            vec!["Created meeting_minutes.md in .templates"]
        );
        assert!(ui.prompts.is_empty());
    }

    #[test]
    fn test_prompts_for_name_and_adds_extension() {
        let (_tmp, ctx) = create_test_workspace();
        let mut ui = ScriptedInteraction::new().answer_text(Some("retro"));

        let path = cmd_new_template(&ctx, NewTemplateArgs { name: None }, &mut ui).unwrap();

        assert_eq!(path, ctx.templates_dir.join("retro.md"));
        assert!(path.exists());
        assert_eq!(
            ui.prompts,
            vec!["Enter new template name (e.g., meeting_minutes.md)"]
        );
    }

    #[test]
    fn test_existing_template_is_opened_untouched() {
        let (_tmp, ctx) = create_workspace_with_templates(&[("daily.md", "# ${ISODate}")]);
        let mut ui = ScriptedInteraction::new();

        let args = NewTemplateArgs {
            name: Some("daily.md".to_string()),
        };
        let path = cmd_new_template(&ctx, args, &mut ui).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# ${ISODate}");
        assert!(ui.notices.is_empty());
        assert_eq!(ui.opened, vec![path]);
    }

    #[test]
    fn test_cancelled_name_creates_nothing_but_the_folder() {
        let (_tmp, ctx) = create_test_workspace();
        let mut ui = ScriptedInteraction::new().answer_text(None);

        let err = cmd_new_template(&ctx, NewTemplateArgs { name: None }, &mut ui).unwrap_err();

        assert!(matches!(err, TemplatorError::Cancelled));
        assert!(ctx.templates_dir.is_dir());
        assert_eq!(std::fs::read_dir(&ctx.templates_dir).unwrap().count(), 0);
        assert!(ui.opened.is_empty());
    }

    #[test]
    fn test_blank_name_is_cancellation() {
        let (_tmp, ctx) = create_test_workspace();
        let mut ui = ScriptedInteraction::new().answer_text(Some("   "));

        let err = cmd_new_template(&ctx, NewTemplateArgs { name: None }, &mut ui).unwrap_err();
        assert!(matches!(err, TemplatorError::Cancelled));
    }

    #[test]
    fn test_unsafe_name_rejected() {
        let (_tmp, ctx) = create_test_workspace();
        let mut ui = ScriptedInteraction::new();

        let args = NewTemplateArgs {
            name: Some("../outside.md".to_string()),
        };
        let err = cmd_new_template(&ctx, args, &mut ui).unwrap_err();

        assert!(matches!(err, TemplatorError::UserError(_)));
        assert!(!ctx.root.join("outside.md").exists());
    }

    #[test]
    fn test_non_markdown_name_still_lists() {
        let (_tmp, ctx) = create_test_workspace();
        let mut ui = ScriptedInteraction::new();

        let args = NewTemplateArgs {
            name: Some("log.txt".to_string()),
        };
        let path = cmd_new_template(&ctx, args, &mut ui).unwrap();

        assert_eq!(path, ctx.templates_dir.join("log.txt.md"));
        assert_eq!(
            crate::templates::list_templates(&ctx).unwrap(),
            vec!["log.txt.md"]
        );
    }
}
