//! Note-level rules that do not depend on storage.

use crate::types::DbId;

/// Sentinel note id meaning "new, not yet persisted".
pub const INVALID_NOTE_ID: DbId = -1;

/// Map a screen-supplied note id onto an optional persisted id.
///
/// The sentinel (and any other non-positive id) means there is no stored
/// note behind the screen yet.
pub fn persisted_note_id(note_id: DbId) -> Option<DbId> {
    (note_id > 0).then_some(note_id)
}
