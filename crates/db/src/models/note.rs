//! Note model.

use notemaker_core::notes::persisted_note_id;
use notemaker_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub color_id: DbId,
}

/// DTO for saving a note with insert-or-replace semantics.
///
/// `id: None` inserts a new row; `Some(id)` replaces the row with that id
/// (or inserts it under that id if it does not exist).
#[derive(Debug, Clone, Validate)]
pub struct SaveNote {
    pub id: Option<DbId>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub content: String,
    pub color_id: DbId,
}

impl SaveNote {
    /// A brand-new note; the store assigns the id.
    pub fn new(title: impl Into<String>, content: impl Into<String>, color_id: DbId) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            color_id,
        }
    }

    /// Target an existing id. Non-positive ids are treated as unset.
    pub fn with_id(mut self, id: DbId) -> Self {
        self.id = persisted_note_id(id);
        self
    }
}
