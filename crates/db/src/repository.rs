//! The storage facade used by every screen.
//!
//! [`Repository`] is the only path to persisted state. [`SqlRepository`]
//! implements it over the per-table repos and kicks off color seeding the
//! moment it is constructed.

use async_trait::async_trait;
use notemaker_core::error::CoreError;
use notemaker_core::types::DbId;
use tokio::sync::watch;

use crate::error::DbResult;
use crate::models::color::Color;
use crate::models::note::{Note, SaveNote};
use crate::repositories::{ColorRepo, NoteRepo};
use crate::seed::seed_default_colors;
use crate::DbPool;

/// Note and color access for the screen assemblers.
///
/// Lookups by id fail with [`CoreError::NotFound`] rather than returning
/// `Option`, so callers decide explicitly how to recover.
#[async_trait]
pub trait Repository: Send + Sync {
    /// All notes, in store order.
    async fn get_all_notes(&self) -> DbResult<Vec<Note>>;

    async fn find_note_by_id(&self, id: DbId) -> DbResult<Note>;

    /// Insert-or-replace keyed by id; returns the stored id.
    async fn insert_note(&self, note: &SaveNote) -> DbResult<DbId>;

    /// Delete by id. Deleting an absent note is not an error and reports
    /// `false`.
    async fn delete_note(&self, id: DbId) -> DbResult<bool>;

    async fn get_all_colors(&self) -> DbResult<Vec<Color>>;

    async fn find_color_by_id(&self, id: DbId) -> DbResult<Color>;
}

/// SQLite-backed [`Repository`].
pub struct SqlRepository {
    pool: DbPool,
    seeded: watch::Receiver<bool>,
}

impl SqlRepository {
    /// Wrap a pool and start seeding the color catalog in the background.
    ///
    /// Must be called from within a Tokio runtime. Seeding failures are
    /// logged and otherwise ignored; use [`wait_for_seeding`] to await the
    /// attempt.
    ///
    /// [`wait_for_seeding`]: SqlRepository::wait_for_seeding
    pub fn new(pool: DbPool) -> Self {
        let (done_tx, done_rx) = watch::channel(false);
        let seed_pool = pool.clone();

        tokio::spawn(async move {
            match seed_default_colors(&seed_pool).await {
                Ok(0) => tracing::debug!("Color catalog already present, nothing to seed"),
                Ok(inserted) => tracing::info!(inserted, "Seeded default colors"),
                Err(e) => {
                    tracing::error!(error = %e, "Error occurred while inserting default colors")
                }
            }
            // Receivers only care that the attempt finished.
            let _ = done_tx.send(true);
        });

        Self {
            pool,
            seeded: done_rx,
        }
    }

    /// Resolve once the background seeding attempt has finished, whether or
    /// not it succeeded.
    pub async fn wait_for_seeding(&self) {
        let mut seeded = self.seeded.clone();
        let _ = seeded.wait_for(|done| *done).await;
    }
}

#[async_trait]
impl Repository for SqlRepository {
    async fn get_all_notes(&self) -> DbResult<Vec<Note>> {
        Ok(NoteRepo::list(&self.pool).await?)
    }

    async fn find_note_by_id(&self, id: DbId) -> DbResult<Note> {
        NoteRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "note", id }.into())
    }

    async fn insert_note(&self, note: &SaveNote) -> DbResult<DbId> {
        Ok(NoteRepo::upsert(&self.pool, note).await?)
    }

    async fn delete_note(&self, id: DbId) -> DbResult<bool> {
        Ok(NoteRepo::delete(&self.pool, id).await?)
    }

    async fn get_all_colors(&self) -> DbResult<Vec<Color>> {
        Ok(ColorRepo::list(&self.pool).await?)
    }

    async fn find_color_by_id(&self, id: DbId) -> DbResult<Color> {
        ColorRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "color", id }.into())
    }
}
