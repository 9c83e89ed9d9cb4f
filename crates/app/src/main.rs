//! `notemaker` -- opens the note store and logs the notes overview.
//!
//! Wires the data layer the way a screen host would: one repository per
//! process, handed to each assembler.
//!
//! # Environment variables
//!
//! | Variable             | Default                 | Description             |
//! |----------------------|-------------------------|-------------------------|
//! | `DATABASE_URL`       | `sqlite://notemaker.db` | SQLite connection URL   |
//! | `DB_MAX_CONNECTIONS` | `5`                     | Pool size               |
//! | `RUST_LOG`           | `DEFAULT_LOG_FILTER`    | `tracing` filter        |

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notemaker_app::config::AppConfig;
use notemaker_app::features::NotesOverviewAssembler;
use notemaker_db::SqlRepository;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "notemaker=debug,notemaker_app=debug,notemaker_db=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env()?;
    tracing::info!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        "Loaded configuration"
    );

    // --- Database ---
    let pool = notemaker_db::create_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to open database")?;
    notemaker_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    notemaker_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database ready");

    // --- Repository ---
    let repository = Arc::new(SqlRepository::new(pool));
    repository.wait_for_seeding().await;

    // --- Notes overview ---
    let overview = NotesOverviewAssembler::new(repository);
    overview.fetch_notes();
    overview.scope().settled().await;

    match overview.notes() {
        Some(items) => {
            tracing::info!(count = items.len(), "Notes overview");
            for item in &items {
                tracing::info!(note = %serde_json::to_string(item)?, "Note");
            }
        }
        None => tracing::warn!("Notes overview could not be loaded"),
    }

    overview.dispose();
    Ok(())
}
