#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use notemaker_core::error::CoreError;
use notemaker_core::types::DbId;
use notemaker_db::models::color::Color;
use notemaker_db::models::note::{Note, SaveNote};
use notemaker_db::{DbResult, Repository, SqlRepository};
use notemaker_events::ScreenEvent;
use tokio::sync::broadcast;

/// In-memory store with the schema applied and the catalog seeded.
pub async fn seeded_repository() -> SqlRepository {
    let pool = notemaker_db::create_memory_pool()
        .await
        .expect("in-memory pool should open");
    notemaker_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");

    let repository = SqlRepository::new(pool);
    repository.wait_for_seeding().await;
    repository
}

/// Wraps a real repository, counting calls and optionally failing them.
pub struct CountingRepository {
    inner: SqlRepository,
    pub reads: AtomicUsize,
    pub inserts: AtomicUsize,
    pub deletes: AtomicUsize,
    failing: AtomicBool,
}

impl CountingRepository {
    pub async fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: seeded_repository().await,
            reads: AtomicUsize::new(0),
            inserts: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        })
    }

    /// Make every subsequent call fail with an internal error.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &SqlRepository {
        &self.inner
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn check(&self) -> DbResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CoreError::Internal("injected storage failure".into()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for CountingRepository {
    async fn get_all_notes(&self) -> DbResult<Vec<Note>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.get_all_notes().await
    }

    async fn find_note_by_id(&self, id: DbId) -> DbResult<Note> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_note_by_id(id).await
    }

    async fn insert_note(&self, note: &SaveNote) -> DbResult<DbId> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.insert_note(note).await
    }

    async fn delete_note(&self, id: DbId) -> DbResult<bool> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.delete_note(id).await
    }

    async fn get_all_colors(&self) -> DbResult<Vec<Color>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.get_all_colors().await
    }

    async fn find_color_by_id(&self, id: DbId) -> DbResult<Color> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_color_by_id(id).await
    }
}

/// Drain whatever events are already buffered.
pub fn drain_events(rx: &mut broadcast::Receiver<ScreenEvent>) -> Vec<ScreenEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
