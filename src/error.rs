//! Error types for jotter

use crate::domain::ValidationError;
use thiserror::Error;

/// Main error type for jotter
#[derive(Debug, Error)]
pub enum JotterError {
    #[error("Invalid note: {0}")]
    Validation(#[from] ValidationError),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// Remote backend could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// Remote backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl JotterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotterError::NoteNotFound(_) => 2,
            JotterError::Validation(_) => 3,
            JotterError::Network(_) | JotterError::Server { .. } => 4,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JotterError::NoteNotFound(id) => {
                format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'jotter list' to see note ids\n\
                    • Create a new note with 'jotter new --title <TITLE>'",
                    id
                )
            }
            JotterError::Validation(ValidationError::EmptyTitle) => {
                format!(
                    "{}\n\n\
                    Example: jotter new --title \"Groceries\" --content \"milk, eggs\"",
                    self
                )
            }
            JotterError::Network(_) | JotterError::Server { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check JOTTER_API_BASE / JOTTER_BACKEND_URL\n\
                    • Unset both variables to work in Local Mode",
                    self
                )
            }
        }
    }
}

/// Result type using JotterError
pub type Result<T> = std::result::Result<T, JotterError>;
