//! Implementation of the `templator create` command.
//!
//! Creates a new file from a template:
//! 1. List `.md` templates and pick one
//! 2. Ask for a title (required)
//! 3. Merge variables: built-ins < config < `--var` < title
//! 4. Prompt for any placeholder still without a value
//! 5. Write `<outputFolder>/<sanitized title>.<defaultFileExtension>` and open it
//!
//! A cancelled pick or title prompt stops the command before anything is
//! written.

use crate::cli::CreateArgs;
use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::error::{Result, TemplatorError};
use crate::fs::atomic_write_file;
use crate::interaction::{Interaction, NoticeLevel};
use crate::resolver::{BuiltinVariables, VariableSet, apply_variables, sanitize_filename};
use crate::templates::{list_templates, normalize_template_name, read_template};
use std::path::PathBuf;
use tracing::{debug, info};

/// Execute the `templator create` command.
///
/// Returns the path of the created file.
pub fn cmd_create(
    ctx: &WorkspaceContext,
    args: CreateArgs,
    ui: &mut dyn Interaction,
) -> Result<PathBuf> {
    let config = ctx.load_config()?;
    let builtins = BuiltinVariables::now(ctx.workspace_name());
    create_from_template(ctx, &config, args, &builtins, ui)
}

/// Body of `create`, with configuration and clock supplied by the caller.
fn create_from_template(
    ctx: &WorkspaceContext,
    config: &Config,
    args: CreateArgs,
    builtins: &BuiltinVariables,
    ui: &mut dyn Interaction,
) -> Result<PathBuf> {
    let templates = list_templates(ctx)?;

    let template = select_template(&templates, args.template.as_deref(), ui)?;
    debug!(template = %template, "selected template");

    let title = read_title(args.title, ui)?;

    let target = ctx.output_dir(config).join(format!(
        "{}.{}",
        sanitize_filename(&title),
        config.default_file_extension
    ));
    if target.exists() && !args.force {
        return Err(TemplatorError::UserError(format!(
            "'{}' already exists.\n\nUse --force to overwrite it, or choose a different title.",
            target.display()
        )));
    }

    let base = VariableSet::new(builtins)
        .with_configured(&config.variables)
        .with_overrides(args.vars)
        .with_title(&title)
        .into_map();

    let text = read_template(ctx, &template)?;
    let content = apply_variables(&text, &base, ui)?;

    atomic_write_file(&target, &content)?;
    info!(template = %template, path = %target.display(), "created file from template");

    if !args.no_open {
        ui.open_document(&target)?;
    }

    if config.show_notifications {
        ui.notify(
            NoticeLevel::Info,
            &format!("Created new file from template: {}", template),
        );
    }

    Ok(target)
}

/// Use the requested template if given, otherwise ask the user to pick one.
fn select_template(
    templates: &[String],
    requested: Option<&str>,
    ui: &mut dyn Interaction,
) -> Result<String> {
    let Some(requested) = requested else {
        return ui
            .prompt_choice("Select a template to create a new file from", templates)?
            .ok_or(TemplatorError::Cancelled);
    };

    let name = normalize_template_name(requested)?;
    if templates.contains(&name) {
        return Ok(name);
    }

    Err(TemplatorError::UserError(format!(
        "template '{}' not found in .templates.\n\nAvailable templates: {}",
        requested,
        templates.join(", ")
    )))
}

/// Title from the command line or a prompt. Blank or cancelled is an error.
fn read_title(given: Option<String>, ui: &mut dyn Interaction) -> Result<String> {
    let title = match given {
        Some(title) => Some(title),
        None => ui.prompt_text("Enter a title for the new file")?,
    };

    match title {
        Some(title) if !title.trim().is_empty() => Ok(title.trim().to_string()),
        _ => Err(TemplatorError::MissingTitle),
    }
}
