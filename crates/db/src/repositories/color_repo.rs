//! Repository for the `colors` table.

use notemaker_core::types::DbId;
use sqlx::{Executor, Sqlite};

use crate::models::color::Color;
use crate::DbPool;

/// Column list for colors queries.
const COLUMNS: &str = "id, hex";

/// Read access to the color catalog plus the inserts used by seeding.
pub struct ColorRepo;

impl ColorRepo {
    /// List all colors, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors ORDER BY id ASC");
        sqlx::query_as::<_, Color>(&query).fetch_all(pool).await
    }

    /// Find a color by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors WHERE id = ?1");
        sqlx::query_as::<_, Color>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count the rows in the table.
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM colors")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Insert a color under its own id.
    pub async fn insert<'e, E>(executor: E, color: &Color) -> Result<(), sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("INSERT INTO colors (id, hex) VALUES (?1, ?2)")
            .bind(color.id)
            .bind(&color.hex)
            .execute(executor)
            .await?;
        Ok(())
    }
}
