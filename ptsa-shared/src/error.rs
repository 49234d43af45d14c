/// Error types for the bootstrap routine
///
/// Every failure that can occur while initializing the database funnels into
/// [`InitError`]. The top-level `init_postgres_db` logs it and reports
/// failure; no variant is retried.

use crate::auth::password::PasswordError;
use crate::seed::SeedError;

/// Result type alias for bootstrap operations
pub type InitResult<T> = Result<T, InitError>;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Connection, query or constraint failure
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Schema creation failed")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Hashing the fallback admin password failed
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// The comprehensive seed could not run
    #[error("Seeding failed")]
    Seed(#[from] SeedError),
}
