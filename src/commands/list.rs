//! Implementation of the `templator list` command.

use crate::context::WorkspaceContext;
use crate::error::Result;
use crate::templates::list_templates;

/// Print template names, one per line.
pub fn cmd_list(ctx: &WorkspaceContext) -> Result<()> {
    for name in list_templates(ctx)? {
        println!("{}", name);
    }
    Ok(())
}
