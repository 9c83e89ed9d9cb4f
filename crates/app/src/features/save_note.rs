//! Save/edit note screen: load one note, pick a color, save or delete.

use std::sync::Arc;

use notemaker_core::colors::DEFAULT_COLOR_ID;
use notemaker_core::notes::persisted_note_id;
use notemaker_core::types::DbId;
use notemaker_db::models::color::Color;
use notemaker_db::models::note::SaveNote;
use notemaker_db::{DbResult, Repository};
use notemaker_events::{Observable, ScreenEvent, ScreenEventBus, ScreenScope};
use tokio::sync::{broadcast, watch};
use validator::Validate;

use super::{color_or_default, report_failure};
use crate::view_data::SaveNoteViewData;

/// Drives the create/edit/delete workflow for a single note.
///
/// Carries the id of the open note (`None` while the note is new) and the
/// last published [`SaveNoteViewData`], whose color is the selected color.
/// Edited title and content are not held here; the screen passes them in on
/// save.
pub struct SaveNoteAssembler {
    repository: Arc<dyn Repository>,
    note_id: Option<DbId>,
    view_data: Arc<Observable<SaveNoteViewData>>,
    colors: Arc<Observable<Vec<Color>>>,
    close_screen: Arc<Observable<ScreenEvent>>,
    events: Arc<ScreenEventBus>,
    scope: ScreenScope,
}

impl SaveNoteAssembler {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self {
            repository,
            note_id: None,
            view_data: Arc::new(Observable::new()),
            colors: Arc::new(Observable::new()),
            close_screen: Arc::new(Observable::new()),
            events: Arc::new(ScreenEventBus::default()),
            scope: ScreenScope::new(),
        }
    }

    /// Open the screen for `note_id`.
    ///
    /// [`INVALID_NOTE_ID`](notemaker_core::notes::INVALID_NOTE_ID) opens a
    /// blank note and publishes the default record without touching storage.
    pub fn fetch_view_data(&mut self, note_id: DbId) {
        self.note_id = persisted_note_id(note_id);

        let Some(note_id) = self.note_id else {
            self.view_data.publish(SaveNoteViewData::default());
            return;
        };

        let repository = Arc::clone(&self.repository);
        let view_data = Arc::clone(&self.view_data);
        let events = Arc::clone(&self.events);

        self.scope.spawn("fetch_note", async move {
            match load_view_data(repository.as_ref(), note_id).await {
                Ok(data) => view_data.publish(data),
                Err(e) => report_failure(&events, "fetch_note", &e),
            }
        });
    }

    /// Publish the full color catalog for the picker.
    pub fn fetch_colors(&self) {
        let repository = Arc::clone(&self.repository);
        let colors = Arc::clone(&self.colors);
        let events = Arc::clone(&self.events);

        self.scope.spawn("fetch_colors", async move {
            match repository.get_all_colors().await {
                Ok(all) => colors.publish(all),
                Err(e) => report_failure(&events, "fetch_colors", &e),
            }
        });
    }

    /// Republish the record with a new color. Nothing is persisted until
    /// [`save`](Self::save).
    pub fn select_color(&self, title: &str, content: &str, color: Color) {
        self.view_data.publish(SaveNoteViewData {
            title: title.to_string(),
            content: content.to_string(),
            color,
        });
    }

    /// Persist the note and close the screen.
    ///
    /// An empty title is silently ignored: no write, no event. The color is
    /// the selected one, or the default color if nothing was ever published.
    ///
    /// The selected color is read when `save` is called. If a
    /// [`fetch_view_data`](Self::fetch_view_data) for an existing note has
    /// not published yet, the default color is saved over the note's stored
    /// color; like overlapping fetches, this is last-write-wins and is not
    /// arbitrated.
    pub fn save(&self, title: &str, content: &str) {
        let color_id = self
            .view_data
            .get()
            .map_or(DEFAULT_COLOR_ID, |data| data.color.id);

        let mut note = SaveNote::new(title, content, color_id);
        if let Some(id) = self.note_id {
            note = note.with_id(id);
        }

        if let Err(e) = note.validate() {
            tracing::debug!(error = %e, "Note not saved");
            return;
        }

        let repository = Arc::clone(&self.repository);
        let close_screen = Arc::clone(&self.close_screen);
        let events = Arc::clone(&self.events);

        self.scope.spawn("save_note", async move {
            match repository.insert_note(&note).await {
                Ok(note_id) => {
                    tracing::info!(note_id, color_id = note.color_id, "Note saved");
                    signal_close(&close_screen, &events);
                }
                Err(e) => report_failure(&events, "save_note", &e),
            }
        });
    }

    /// Delete the open note and close the screen. Does nothing for a note
    /// that was never saved.
    pub fn delete(&self) {
        let Some(note_id) = self.note_id else {
            return;
        };

        let repository = Arc::clone(&self.repository);
        let close_screen = Arc::clone(&self.close_screen);
        let events = Arc::clone(&self.events);

        self.scope.spawn("delete_note", async move {
            match repository.delete_note(note_id).await {
                Ok(deleted) => {
                    tracing::info!(note_id, deleted, "Note deleted");
                    signal_close(&close_screen, &events);
                }
                Err(e) => report_failure(&events, "delete_note", &e),
            }
        });
    }

    /// Id of the open note, `None` while it is new.
    pub fn note_id(&self) -> Option<DbId> {
        self.note_id
    }

    pub fn view_data(&self) -> Option<SaveNoteViewData> {
        self.view_data.get()
    }

    pub fn colors(&self) -> Option<Vec<Color>> {
        self.colors.get()
    }

    pub fn subscribe_view_data(&self) -> watch::Receiver<Option<SaveNoteViewData>> {
        self.view_data.subscribe()
    }

    pub fn subscribe_colors(&self) -> watch::Receiver<Option<Vec<Color>>> {
        self.colors.subscribe()
    }

    /// The close-screen signal, once a save or delete has succeeded.
    ///
    /// Sticky: a screen that looks after the fact still sees it.
    pub fn close_screen_event(&self) -> Option<ScreenEvent> {
        self.close_screen.get()
    }

    pub fn subscribe_close_screen(&self) -> watch::Receiver<Option<ScreenEvent>> {
        self.close_screen.subscribe()
    }

    /// Live stream of close and failure events. Only events sent after
    /// subscribing are delivered; use
    /// [`subscribe_close_screen`](Self::subscribe_close_screen) to not miss
    /// the close signal.
    pub fn subscribe_events(&self) -> broadcast::Receiver<ScreenEvent> {
        self.events.subscribe()
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// Cancel all outstanding work. Called when the screen is torn down.
    pub fn dispose(&self) {
        self.scope.dispose();
    }
}

/// Record the close signal in the sticky slot and announce it on the bus.
fn signal_close(close_screen: &Observable<ScreenEvent>, events: &ScreenEventBus) {
    let event = ScreenEvent::close_screen();
    close_screen.publish(event.clone());
    events.publish(event);
}

/// Load a stored note and its color (default color if missing).
pub async fn load_view_data(
    repository: &dyn Repository,
    note_id: DbId,
) -> DbResult<SaveNoteViewData> {
    let note = repository.find_note_by_id(note_id).await?;
    let lookup = repository.find_color_by_id(note.color_id).await;
    let color = color_or_default(lookup, note.color_id);

    Ok(SaveNoteViewData {
        title: note.title,
        content: note.content,
        color,
    })
}
