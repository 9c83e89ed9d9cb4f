use notemaker_core::error::CoreError;

/// Default database location, relative to the working directory.
const DEFAULT_DATABASE_URL: &str = "sqlite://notemaker.db";

/// Default pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection URL.
    pub database_url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `DATABASE_URL`       | `sqlite://notemaker.db` |
    /// | `DB_MAX_CONNECTIONS` | `5`                     |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                CoreError::Validation(format!(
                    "DB_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                ))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}
