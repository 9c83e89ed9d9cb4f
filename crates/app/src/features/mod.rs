//! Screen assemblers.
//!
//! Each assembler owns a [`ScreenScope`](notemaker_events::ScreenScope),
//! its observable slots and a [`ScreenEventBus`]. Work runs on background
//! tasks; results are published to the slots and the UI renders whatever
//! it last saw.

pub mod notes_overview;
pub mod save_note;

pub use notes_overview::NotesOverviewAssembler;
pub use save_note::SaveNoteAssembler;

use notemaker_core::types::DbId;
use notemaker_db::models::color::Color;
use notemaker_db::{DbError, DbResult};
use notemaker_events::{ScreenEvent, ScreenEventBus};

/// Resolve a note's color lookup, substituting the default color on failure.
///
/// A missing color is expected (dangling reference) and logged at debug;
/// any other failure is logged as a warning. Neither fails the caller.
pub fn color_or_default(lookup: DbResult<Color>, color_id: DbId) -> Color {
    match lookup {
        Ok(color) => color,
        Err(e) if e.is_not_found() => {
            tracing::debug!(color_id, "Color not found, using default color");
            Color::default_color()
        }
        Err(e) => {
            tracing::warn!(color_id, error = %e, "Color lookup failed, using default color");
            Color::default_color()
        }
    }
}

/// Log a failed background operation and emit it on the screen's bus.
///
/// The observable the operation would have updated is left untouched.
fn report_failure(events: &ScreenEventBus, operation: &'static str, error: &DbError) {
    tracing::error!(operation, error = %error, "Screen operation failed");
    events.publish(ScreenEvent::operation_failed(operation, error.to_string()));
}
