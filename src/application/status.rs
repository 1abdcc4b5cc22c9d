//! Status use case: readiness badge and storage location

use crate::error::Result;
use crate::infrastructure::{AppConfig, Mode, NoteRepository, NoteStorage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub mode: Mode,
    pub api_base: Option<String>,
    pub flags_label: &'static str,
    pub store: String,
    pub note_count: usize,
    pub persistent: bool,
}

pub fn status<S: NoteStorage>(
    config: &AppConfig,
    repository: &mut NoteRepository<S>,
) -> Result<Status> {
    let note_count = repository.list()?.len();

    Ok(Status {
        mode: config.mode(),
        api_base: config.api_base.clone(),
        flags_label: config.flags.label(),
        store: repository.storage().describe(),
        note_count,
        persistent: repository.is_persistent(),
    })
}
