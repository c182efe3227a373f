//! User interaction seam for templator.
//!
//! Every prompt, pick, notice, and "open this file" request goes through the
//! [`Interaction`] trait, so commands can run against a real terminal or a
//! scripted fake in tests.
//!
//! - **Terminal**: line-based prompts over any `BufRead`/`Write` pair
//! - **Scripted** (tests only): queued answers and recorded calls

mod terminal;

#[cfg(test)]
mod scripted;

use crate::error::Result;
use std::path::Path;

pub use terminal::TerminalInteraction;

#[cfg(test)]
pub use scripted::ScriptedInteraction;

/// Severity of a notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Interactive collaborator used by commands.
///
/// `Ok(None)` from a prompt means the user cancelled. `Err` means the
/// collaborator itself failed and the command must abort.
pub trait Interaction {
    /// Ask for a single line of text.
    fn prompt_text(&mut self, message: &str) -> Result<Option<String>>;

    /// Ask the user to pick one entry of `choices`.
    fn prompt_choice(&mut self, message: &str, choices: &[String]) -> Result<Option<String>>;

    /// Show a message. Fire-and-forget.
    fn notify(&mut self, level: NoticeLevel, message: &str);

    /// Present a file to the user.
    fn open_document(&mut self, path: &Path) -> Result<()>;
}
