//! Save note use case: the editor's save action

use crate::domain::{Note, NoteDraft};
use crate::error::{JotterError, Result};
use crate::infrastructure::{NoteRepository, NoteStorage};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub note: Note,
    pub created: bool,
}

/// Service for saving editor drafts through the repository
pub struct SaveNoteService<'a, S: NoteStorage> {
    repository: &'a mut NoteRepository<S>,
}

impl<'a, S: NoteStorage> SaveNoteService<'a, S> {
    pub fn new(repository: &'a mut NoteRepository<S>) -> Self {
        SaveNoteService { repository }
    }

    /// Validate and stamp `draft`, then update the stored note with the same
    /// id or create a new one.
    pub fn execute(&mut self, draft: NoteDraft) -> Result<SaveOutcome> {
        let note = draft.into_note()?;
        self.store(note)
    }

    /// Edit an existing note. Fields left as `None` keep their current values.
    pub fn edit(
        &mut self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<SaveOutcome> {
        let existing = self
            .repository
            .get(id)?
            .ok_or_else(|| JotterError::NoteNotFound(id.to_string()))?;

        let mut draft = NoteDraft::for_note(&existing);
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(content) = content {
            draft.content = content;
        }

        self.execute(draft)
    }

    fn store(&mut self, note: Note) -> Result<SaveOutcome> {
        let exists = self.repository.get(&note.id)?.is_some();

        let note = if exists {
            self.repository.update(note)?
        } else {
            self.repository.create(note)?
        };

        info!(id = %note.id, created = !exists, "note saved");
        Ok(SaveOutcome {
            note,
            created: !exists,
        })
    }
}
