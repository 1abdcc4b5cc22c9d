//! Application layer - Use cases and orchestration

pub mod delete_note;
pub mod list_notes;
pub mod save_note;
pub mod show_note;
pub mod status;

pub use delete_note::delete_note;
pub use list_notes::list_notes;
pub use save_note::{SaveNoteService, SaveOutcome};
pub use show_note::show_note;
pub use status::{status, Status};
