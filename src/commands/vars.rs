//! Implementation of the `templator vars` command.
//!
//! Shows the variables every template can use without prompting: the
//! built-ins merged with the configured `variables`.

use crate::cli::VarsArgs;
use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::error::{Result, TemplatorError};
use crate::resolver::{BuiltinVariables, VariableMap, VariableSet};

/// Execute the `templator vars` command.
pub fn cmd_vars(ctx: &WorkspaceContext, args: VarsArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let vars = base_variables(&config, &BuiltinVariables::now(ctx.workspace_name()));

    if args.json {
        let json = serde_json::to_string_pretty(&vars).map_err(|e| {
            TemplatorError::UserError(format!("failed to serialize variables: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    let width = vars.keys().map(|k| k.len()).max().unwrap_or(0);
    for (name, value) in &vars {
        println!("{:width$} = {}", name, value, width = width);
    }
    Ok(())
}

fn base_variables(config: &Config, builtins: &BuiltinVariables) -> VariableMap {
    VariableSet::new(builtins)
        .with_configured(&config.variables)
        .into_map()
}
