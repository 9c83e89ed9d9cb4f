//! First-run population of the color catalog.

use crate::models::color::Color;
use crate::repositories::ColorRepo;
use crate::DbPool;

/// Insert the default colors if, and only if, the `colors` table is empty.
///
/// The emptiness check and the inserts share one transaction. Returns the
/// number of rows inserted: `14` on a fresh store, `0` otherwise.
pub async fn seed_default_colors(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if ColorRepo::count(&mut *tx).await? > 0 {
        return Ok(0);
    }

    let colors = Color::catalog();
    for color in &colors {
        ColorRepo::insert(&mut *tx, color).await?;
    }
    tx.commit().await?;

    Ok(colors.len() as u64)
}
