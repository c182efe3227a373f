//! Line-based terminal interaction.
//!
//! Prompts and notices are written to the writer (stderr for the real CLI,
//! keeping stdout free for command output). Answers are read one line at a
//! time; end of input counts as cancellation.

use super::{Interaction, NoticeLevel};
use crate::error::{Result, TemplatorError};
use std::io::{self, BufRead, StdinLock, Stderr, Write};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Terminal-backed [`Interaction`].
pub struct TerminalInteraction<R, W> {
    reader: R,
    writer: W,
    /// Editor command line used by `open_document`, shell-word quoted.
    editor: Option<String>,
}

impl TerminalInteraction<StdinLock<'static>, Stderr> {
    /// Interaction over the process's stdin and stderr.
    ///
    /// The editor is taken from `$VISUAL`, then `$EDITOR`.
    pub fn stdio() -> Self {
        let editor = ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());

        Self::new(io::stdin().lock(), io::stderr(), editor)
    }
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub fn new(reader: R, writer: W, editor: Option<String>) -> Self {
        Self {
            reader,
            writer,
            editor,
        }
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| TemplatorError::io("failed to read from terminal", e))?;

        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{}", text)
            .and_then(|()| self.writer.flush())
            .map_err(|e| TemplatorError::io("failed to write to terminal", e))
    }

    #[cfg(test)]
    pub(crate) fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn prompt_text(&mut self, message: &str) -> Result<Option<String>> {
        self.write_prompt(&format!("{} ", message))?;
        self.read_line()
    }

    fn prompt_choice(&mut self, message: &str, choices: &[String]) -> Result<Option<String>> {
        let mut listing = format!("{}\n", message);
        for (i, choice) in choices.iter().enumerate() {
            listing.push_str(&format!("  {}) {}\n", i + 1, choice));
        }
        self.write_prompt(&listing)?;

        loop {
            self.write_prompt("> ")?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(None);
            }

            if let Ok(n) = answer.parse::<usize>()
                && (1..=choices.len()).contains(&n)
            {
                return Ok(Some(choices[n - 1].clone()));
            }
            if let Some(choice) = choices.iter().find(|c| c.as_str() == answer) {
                return Ok(Some(choice.clone()));
            }

            self.write_prompt(&format!(
                "Invalid selection '{}'. Enter a number between 1 and {}, or leave empty to cancel.\n",
                answer,
                choices.len()
            ))?;
        }
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        let _ = match level {
            NoticeLevel::Info => writeln!(self.writer, "{}", message),
            NoticeLevel::Warning => writeln!(self.writer, "Warning: {}", message),
            NoticeLevel::Error => writeln!(self.writer, "Error: {}", message),
        };
    }

    fn open_document(&mut self, path: &Path) -> Result<()> {
        let Some(editor) = self.editor.as_deref() else {
            return writeln!(self.writer, "Open: {}", path.display())
                .map_err(|e| TemplatorError::io("failed to write to terminal", e));
        };

        let words = shell_words::split(editor).map_err(|e| {
            TemplatorError::UserError(format!("failed to parse editor command '{}': {}", editor, e))
        })?;
        let Some((program, args)) = words.split_first() else {
            return Err(TemplatorError::UserError(
                "editor command is empty".to_string(),
            ));
        };

        debug!(editor = %program, path = %path.display(), "opening document");
        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|e| TemplatorError::io(format!("failed to launch editor '{}'", program), e))?;

        if !status.success() {
            return Err(TemplatorError::UserError(format!(
                "editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }
}
