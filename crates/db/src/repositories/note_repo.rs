//! Repository for the `notes` table.

use notemaker_core::types::DbId;

use crate::models::note::{Note, SaveNote};
use crate::DbPool;

/// Column list for notes queries.
const COLUMNS: &str = "id, title, content, color_id";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY id ASC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = ?1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a note, returning its id.
    ///
    /// A `None` id binds `NULL`, which makes SQLite assign a fresh rowid.
    pub async fn upsert(pool: &DbPool, input: &SaveNote) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT OR REPLACE INTO notes (id, title, content, color_id)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(input.id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(input.color_id)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
