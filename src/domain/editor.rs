//! Editor boundary: draft validation and save stamping
//!
//! The repository never validates or synthesizes ids and timestamps; the
//! editor hands it a fully formed [`Note`].

use crate::domain::note::{generate_note_id, now_timestamp, Note};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    EmptyTitle,
}

/// Unsaved editor state. `id` is bound when editing an existing note.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteDraft {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NoteDraft {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Start editing an existing note.
    pub fn for_note(note: &Note) -> Self {
        NoteDraft {
            id: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Validate and stamp the draft with the current time.
    pub fn into_note(self) -> Result<Note, ValidationError> {
        self.into_note_at(now_timestamp())
    }

    /// Validate and stamp the draft with `updated_at`.
    ///
    /// The title is trimmed; an unbound (or empty) id gets a freshly generated one.
    pub fn into_note_at(self, updated_at: impl Into<String>) -> Result<Note, ValidationError> {
        self.validate()?;

        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => generate_note_id(),
        };

        Ok(Note::new(id, self.title.trim(), self.content, updated_at))
    }
}
