//! Show note use case

use crate::domain::Note;
use crate::error::{JotterError, Result};
use crate::infrastructure::{NoteRepository, NoteStorage};

/// Look up a single note by id.
pub fn show_note<S: NoteStorage>(repository: &mut NoteRepository<S>, id: &str) -> Result<Note> {
    repository
        .get(id)?
        .ok_or_else(|| JotterError::NoteNotFound(id.to_string()))
}
