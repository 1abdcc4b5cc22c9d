//! Infrastructure layer - Persistence, configuration and logging

pub mod config;
pub mod logging;
pub mod repository;
pub mod storage;

pub use config::{AppConfig, FeatureFlags, Mode};
pub use repository::{Deleted, NoteRepository, RepositoryState};
pub use storage::{FileStorage, MemoryStorage, NoteStorage, StorageError};
