//! Storage adapter: the whole notes collection as one JSON blob

use crate::domain::Note;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Fixed logical key the collection is stored under.
pub const NOTES_KEY: &str = "notes_app__notes";

#[derive(Debug, Error)]
pub enum StorageError {
    /// Read or write against the backing store failed.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The stored blob is not a JSON array of notes.
    #[error("stored notes are unreadable: {0}")]
    Corrupt(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Backing store for the full notes collection.
pub trait NoteStorage {
    /// Load the collection. An absent blob is an empty collection.
    fn load(&self) -> StorageResult<Vec<Note>>;

    /// Overwrite the collection with `notes`.
    fn save(&mut self, notes: &[Note]) -> StorageResult<()>;

    /// Human-readable location, for status output and logs.
    fn describe(&self) -> String;
}

/// Parse a stored blob. Empty input is an empty collection.
///
/// Only a blob that is not a JSON array is corrupt. Elements that are not
/// note records are skipped one by one; missing text fields read as empty.
pub fn parse_notes(raw: &str) -> StorageResult<Vec<Note>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;

    let serde_json::Value::Array(items) = value else {
        return Err(StorageError::Corrupt("not a JSON array".to_string()));
    };

    let mut notes = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Note>(item) {
            Ok(note) => notes.push(note),
            Err(e) => warn!(index, error = %e, "skipping unreadable note record"),
        }
    }
    Ok(notes)
}

fn serialize_notes(notes: &[Note]) -> StorageResult<String> {
    serde_json::to_string(notes).map_err(|e| StorageError::Unavailable(e.to_string()))
}

/// JSON file storage at `<dir>/notes_app__notes.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", NOTES_KEY))
    }

    /// Best-effort atomic replace: write a temp file next to the target, then
    /// rename it into place.
    fn write_atomic(&self, contents: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path();
        let tmp_path = self
            .dir
            .join(format!("{}.json.tmp-{}", NOTES_KEY, std::process::id()));

        fs::write(&tmp_path, contents)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(())
    }
}

impl NoteStorage for FileStorage {
    fn load(&self) -> StorageResult<Vec<Note>> {
        let path = self.path();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored notes");
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Err(StorageError::Corrupt(format!("{}: {}", path.display(), e)))
            }
            Err(e) => {
                return Err(StorageError::Unavailable(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        };

        parse_notes(&raw)
    }

    fn save(&mut self, notes: &[Note]) -> StorageResult<()> {
        let contents = serialize_notes(notes)?;

        self.write_atomic(&contents).map_err(|e| {
            StorageError::Unavailable(format!("{}: {}", self.path().display(), e))
        })?;

        debug!(path = %self.path().display(), count = notes.len(), "notes written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

/// In-process blob store. Can be made unavailable to simulate a blocked store.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    blob: Option<String>,
    available: bool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            blob: None,
            available: true,
        }
    }

    /// Storage seeded with a raw blob, as if written by an earlier session.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        MemoryStorage {
            blob: Some(raw.into()),
            available: true,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl NoteStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Vec<Note>> {
        if !self.available {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        match &self.blob {
            Some(raw) => parse_notes(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, notes: &[Note]) -> StorageResult<()> {
        if !self.available {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        self.blob = Some(serialize_notes(notes)?);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
