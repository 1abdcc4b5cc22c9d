//! Domain layer - Note model, editor rules and list presentation

pub mod editor;
pub mod note;
pub mod preview;

pub use editor::{NoteDraft, ValidationError};
pub use note::Note;
pub use preview::{display_title, preview};
