//! Error types for the templator CLI.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code and
//! to the notice level it is reported with.

use crate::exit_codes;
use crate::interaction::NoticeLevel;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for templator operations.
#[derive(Error, Debug)]
pub enum TemplatorError {
    /// The workspace root does not exist or is not a directory.
    #[error("Open a workspace first: '{0}' is not a directory.")]
    NoWorkspace(PathBuf),

    /// No `.templates` directory, or it holds no templates.
    #[error("{0}")]
    NoTemplates(String),

    /// The user cancelled a prompt or a pick.
    #[error("cancelled")]
    Cancelled,

    /// A title is required to name the generated file.
    #[error("A title is required to create a file from a template.")]
    MissingTitle,

    /// Bad arguments, bad configuration, or a refused overwrite.
    #[error("{0}")]
    UserError(String),

    /// A file system operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl TemplatorError {
    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        TemplatorError::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TemplatorError::NoWorkspace(_) => exit_codes::USER_ERROR,
            TemplatorError::NoTemplates(_) => exit_codes::NOTHING_TO_DO,
            TemplatorError::Cancelled => exit_codes::CANCELLED,
            TemplatorError::MissingTitle => exit_codes::NOTHING_TO_DO,
            TemplatorError::UserError(_) => exit_codes::USER_ERROR,
            TemplatorError::Io { .. } => exit_codes::IO_FAILURE,
        }
    }

    /// How the error is shown to the user. `None` means the abort is silent.
    pub fn notice_level(&self) -> Option<NoticeLevel> {
        match self {
            TemplatorError::Cancelled => None,
            TemplatorError::NoTemplates(_) | TemplatorError::MissingTitle => {
                Some(NoticeLevel::Warning)
            }
            TemplatorError::NoWorkspace(_)
            | TemplatorError::UserError(_)
            | TemplatorError::Io { .. } => Some(NoticeLevel::Error),
        }
    }
}

/// Result type alias for templator operations.
pub type Result<T> = std::result::Result<T, TemplatorError>;
