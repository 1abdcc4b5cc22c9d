//! Note repository: write-through cache over a storage adapter

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::storage::NoteStorage;
use tracing::{debug, warn};

/// Confirmation returned by [`NoteRepository::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryState {
    Uninitialized,
    Ready,
}

/// Authoritative in-memory view of all notes.
///
/// The cache is hydrated from storage on first use and written through on
/// every mutation. Storage failures are logged and absorbed: a failed load
/// starts from an empty collection, a failed save keeps the cache as the only
/// copy until the next successful write.
///
/// Operations return `Result` so a remote backend can report network and
/// server failures; against local storage they always succeed.
#[derive(Debug)]
pub struct NoteRepository<S: NoteStorage> {
    storage: S,
    cache: Vec<Note>,
    state: RepositoryState,
    persistent: bool,
}

impl<S: NoteStorage> NoteRepository<S> {
    pub fn new(storage: S) -> Self {
        NoteRepository {
            storage,
            cache: Vec::new(),
            state: RepositoryState::Uninitialized,
            persistent: true,
        }
    }

    pub fn state(&self) -> RepositoryState {
        self.state
    }

    /// False once a storage read or write has failed, until a write succeeds.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Hydrate the cache from storage. Only the first call reads.
    pub fn ensure_loaded(&mut self) {
        if self.state == RepositoryState::Ready {
            return;
        }

        self.cache = match self.storage.load() {
            Ok(notes) => {
                debug!(count = notes.len(), store = %self.storage.describe(), "notes loaded");
                notes
            }
            Err(e) => {
                warn!(store = %self.storage.describe(), error = %e, "starting with no notes");
                self.persistent = false;
                Vec::new()
            }
        };
        self.state = RepositoryState::Ready;
    }

    /// All notes, newest first.
    pub fn list(&mut self) -> Result<Vec<Note>> {
        self.ensure_loaded();
        Ok(self.cache.clone())
    }

    pub fn get(&mut self, id: &str) -> Result<Option<Note>> {
        self.ensure_loaded();
        Ok(self.cache.iter().find(|n| n.id == id).cloned())
    }

    /// Prepend `note`. The caller supplies a unique id and a valid title.
    pub fn create(&mut self, note: Note) -> Result<Note> {
        self.ensure_loaded();
        self.cache.insert(0, note.clone());
        self.persist();
        Ok(note)
    }

    /// Replace the note with the same id in place; an unknown id is prepended.
    pub fn update(&mut self, note: Note) -> Result<Note> {
        self.ensure_loaded();
        match self.cache.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => *slot = note.clone(),
            None => self.cache.insert(0, note.clone()),
        }
        self.persist();
        Ok(note)
    }

    /// Remove every note with `id`. Deleting an absent id is not an error.
    pub fn delete(&mut self, id: &str) -> Result<Deleted> {
        self.ensure_loaded();
        self.cache.retain(|n| n.id != id);
        self.persist();
        Ok(Deleted { id: id.to_string() })
    }

    fn persist(&mut self) {
        match self.storage.save(&self.cache) {
            Ok(()) => {
                if !self.persistent {
                    debug!(store = %self.storage.describe(), "storage writable again");
                }
                self.persistent = true;
            }
            Err(e) => {
                warn!(
                    store = %self.storage.describe(),
                    error = %e,
                    "notes kept in memory only"
                );
                self.persistent = false;
            }
        }
    }
}
