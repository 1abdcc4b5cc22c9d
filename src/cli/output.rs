//! Output formatting utilities

use crate::application::Status;
use crate::domain::{display_title, preview, Note};

pub const EMPTY_LIST_MESSAGE: &str = "No notes yet. Create your first note!";

/// Format notes for the list view: id and title, then an indented preview.
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!("{}  {}\n", note.id, display_title(note)));

        let shown = preview(&note.content).replace(['\r', '\n'], " ");
        if !shown.is_empty() {
            output.push_str(&format!("    {}\n", shown));
        }
    }
    output
}

/// Format a single note with its metadata.
pub fn format_note_detail(note: &Note) -> String {
    let mut output = format!(
        "# {}\nid: {}\nupdated: {}\n",
        display_title(note),
        note.id,
        note.updated_at
    );
    if !note.content.is_empty() {
        output.push('\n');
        output.push_str(&note.content);
        output.push('\n');
    }
    output
}

pub fn format_status(status: &Status) -> String {
    let mut output = format!("mode = {}\n", status.mode.label());
    if let Some(base) = &status.api_base {
        output.push_str(&format!("api = {}\n", base));
    }
    output.push_str(&format!("flags = {}\n", status.flags_label));
    output.push_str(&format!("store = {}\n", status.store));
    output.push_str(&format!("notes = {}\n", status.note_count));
    if !status.persistent {
        output.push_str("persistence = disabled (storage unavailable)\n");
    }
    output
}
