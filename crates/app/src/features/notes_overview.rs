//! Notes overview screen: every note joined with its color.

use std::sync::Arc;

use futures::future::join_all;
use notemaker_db::{DbResult, Repository};
use notemaker_events::{Observable, ScreenEvent, ScreenEventBus, ScreenScope};
use tokio::sync::{broadcast, watch};

use super::{color_or_default, report_failure};
use crate::view_data::NoteOverviewItemData;

/// Assembles the list shown on the overview screen.
///
/// Each [`fetch_notes`](Self::fetch_notes) runs independently; when two
/// overlap, whichever finishes last is what the slot holds.
pub struct NotesOverviewAssembler {
    repository: Arc<dyn Repository>,
    notes: Arc<Observable<Vec<NoteOverviewItemData>>>,
    events: Arc<ScreenEventBus>,
    scope: ScreenScope,
}

impl NotesOverviewAssembler {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self {
            repository,
            notes: Arc::new(Observable::new()),
            events: Arc::new(ScreenEventBus::default()),
            scope: ScreenScope::new(),
        }
    }

    /// Load all notes with their colors and publish them as one list.
    pub fn fetch_notes(&self) {
        let repository = Arc::clone(&self.repository);
        let notes = Arc::clone(&self.notes);
        let events = Arc::clone(&self.events);

        self.scope.spawn("fetch_notes", async move {
            match load_overview(repository.as_ref()).await {
                Ok(items) => {
                    tracing::debug!(count = items.len(), "Notes overview loaded");
                    notes.publish(items);
                }
                Err(e) => report_failure(&events, "fetch_notes", &e),
            }
        });
    }

    pub fn notes(&self) -> Option<Vec<NoteOverviewItemData>> {
        self.notes.get()
    }

    pub fn subscribe_notes(&self) -> watch::Receiver<Option<Vec<NoteOverviewItemData>>> {
        self.notes.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ScreenEvent> {
        self.events.subscribe()
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// Cancel all outstanding fetches. Called when the screen is torn down.
    pub fn dispose(&self) {
        self.scope.dispose();
    }
}

/// Fetch all notes, then each note's color concurrently.
///
/// A color that cannot be loaded is replaced by the default color; only a
/// failure to list the notes fails the whole load. Output keeps note order.
pub async fn load_overview(repository: &dyn Repository) -> DbResult<Vec<NoteOverviewItemData>> {
    let notes = repository.get_all_notes().await?;

    let items = join_all(notes.into_iter().map(|note| async move {
        let lookup = repository.find_color_by_id(note.color_id).await;
        let color = color_or_default(lookup, note.color_id);
        NoteOverviewItemData { note, color }
    }))
    .await;

    Ok(items)
}
