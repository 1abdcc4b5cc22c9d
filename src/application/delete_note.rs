//! Delete note use case

use crate::error::Result;
use crate::infrastructure::{Deleted, NoteRepository, NoteStorage};

/// Delete a note by id. Absent ids are confirmed like any other.
pub fn delete_note<S: NoteStorage>(
    repository: &mut NoteRepository<S>,
    id: &str,
) -> Result<Deleted> {
    repository.delete(id)
}
