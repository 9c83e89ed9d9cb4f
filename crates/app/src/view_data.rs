//! Screen-ready records produced by the assemblers.
//!
//! Built fresh on every fetch and never persisted.

use notemaker_db::models::color::Color;
use notemaker_db::models::note::Note;
use serde::Serialize;

/// One row of the notes overview: a note joined with its color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteOverviewItemData {
    pub note: Note,
    pub color: Color,
}

/// Contents of the save/edit screen.
///
/// `color` doubles as the currently selected color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveNoteViewData {
    pub title: String,
    pub content: String,
    pub color: Color,
}

impl Default for SaveNoteViewData {
    /// Empty note in the default color.
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            color: Color::default_color(),
        }
    }
}
