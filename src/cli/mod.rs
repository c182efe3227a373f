//! CLI argument parsing for templator.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::resolver::parse_assignment;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Templator: create notes and other text files from reusable templates.
///
/// Templates are `.md` files in the workspace's `.templates/` folder.
/// `${name}` placeholders are filled from built-in values (ISODate, date,
/// timestamp, workspaceName), configured variables, command-line values,
/// or prompted for.
#[derive(Parser, Debug)]
#[command(name = "templator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace root (defaults to the current directory).
    #[arg(short, long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for templator.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set up the workspace.
    ///
    /// Creates the `.templates/` folder and a default `.templator.yaml`.
    Init,

    /// Create a new, empty template and open it.
    ///
    /// Prompts for a name when none is given. An existing template is
    /// opened as-is.
    NewTemplate(NewTemplateArgs),

    /// Create a new file from a template.
    ///
    /// Picks a template, asks for a title, fills in placeholders, and writes
    /// `<outputFolder>/<title>.<defaultFileExtension>`.
    Create(CreateArgs),

    /// List available templates.
    #[command(alias = "ls")]
    List,

    /// Show the variables available to every template.
    Vars(VarsArgs),
}

/// Arguments for the `new-template` command.
#[derive(Parser, Debug)]
pub struct NewTemplateArgs {
    /// Template file name (e.g., meeting_minutes.md).
    pub name: Option<String>,
}

/// Arguments for the `create` command.
#[derive(Parser, Debug, Default)]
pub struct CreateArgs {
    /// Template to use; prompts with a list when omitted.
    #[arg(short, long)]
    pub template: Option<String>,

    /// Title of the new file; prompts when omitted.
    #[arg(long)]
    pub title: Option<String>,

    /// Extra variable for this run (repeatable).
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub vars: Vec<(String, String)>,

    /// Overwrite the target file if it already exists.
    #[arg(short, long)]
    pub force: bool,

    /// Do not open the created file.
    #[arg(long)]
    pub no_open: bool,
}

/// Arguments for the `vars` command.
#[derive(Parser, Debug)]
pub struct VarsArgs {
    /// Print as a JSON object.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
