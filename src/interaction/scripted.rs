//! Scripted interaction for tests.

use super::{Interaction, NoticeLevel};
use crate::error::{Result, TemplatorError};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Plays back queued answers and records everything it was asked.
///
/// Running out of queued answers is an error, so a test fails loudly when a
/// command prompts more than expected.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    text_answers: VecDeque<Option<String>>,
    choice_answers: VecDeque<Option<String>>,
    pub prompts: Vec<String>,
    pub choices_offered: Vec<Vec<String>>,
    pub notices: Vec<(NoticeLevel, String)>,
    pub opened: Vec<PathBuf>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next text prompt; `None` cancels.
    pub fn answer_text(mut self, answer: Option<&str>) -> Self {
        self.text_answers.push_back(answer.map(str::to_string));
        self
    }

    /// Queue an answer for the next choice prompt; `None` cancels.
    pub fn answer_choice(mut self, answer: Option<&str>) -> Self {
        self.choice_answers.push_back(answer.map(str::to_string));
        self
    }

    pub fn notices_at(&self, level: NoticeLevel) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt_text(&mut self, message: &str) -> Result<Option<String>> {
        self.prompts.push(message.to_string());
        self.text_answers.pop_front().ok_or_else(|| {
            TemplatorError::UserError(format!("unexpected text prompt: {}", message))
        })
    }

    fn prompt_choice(&mut self, message: &str, choices: &[String]) -> Result<Option<String>> {
        self.prompts.push(message.to_string());
        self.choices_offered.push(choices.to_vec());
        self.choice_answers.pop_front().ok_or_else(|| {
            TemplatorError::UserError(format!("unexpected choice prompt: {}", message))
        })
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }

    fn open_document(&mut self, path: &Path) -> Result<()> {
        self.opened.push(path.to_path_buf());
        Ok(())
    }
}
