//! Command implementations for templator.
//!
//! This module provides the dispatcher that resolves the workspace and routes
//! CLI commands to their implementations.

mod create;
mod init;
mod list;
mod new_template;
mod vars;

use crate::cli::{Cli, Command};
use crate::context::WorkspaceContext;
use crate::error::Result;
use crate::interaction::Interaction;
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// Every command works on a single workspace, resolved once here from
/// `--workspace` or the current directory.
pub fn dispatch(cli: Cli, ui: &mut dyn Interaction) -> Result<()> {
    let ctx = WorkspaceContext::resolve(cli.workspace.as_deref())?;
    debug!(workspace = %ctx.root.display(), "resolved workspace");

    match cli.command {
        Command::Init => init::cmd_init(&ctx),
        Command::NewTemplate(args) => new_template::cmd_new_template(&ctx, args, ui).map(|_| ()),
        Command::Create(args) => create::cmd_create(&ctx, args, ui).map(|_| ()),
        Command::List => list::cmd_list(&ctx),
        Command::Vars(args) => vars::cmd_vars(&ctx, args),
    }
}
