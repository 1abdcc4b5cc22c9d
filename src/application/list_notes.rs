//! List notes use case

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::{NoteRepository, NoteStorage};

/// All notes, newest first.
pub fn list_notes<S: NoteStorage>(repository: &mut NoteRepository<S>) -> Result<Vec<Note>> {
    repository.list()
}
