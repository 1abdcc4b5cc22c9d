//! List row preview transform

use crate::domain::Note;

pub const PREVIEW_CHARS: usize = 64;
pub const UNTITLED: &str = "Untitled";

/// Shorten content for the list view: over [`PREVIEW_CHARS`] characters is cut
/// and suffixed with an ellipsis.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", &content[..cut]),
        None => content.to_string(),
    }
}

/// Title shown for a note in the list.
pub fn display_title(note: &Note) -> &str {
    if note.title.is_empty() {
        UNTITLED
    } else {
        &note.title
    }
}
