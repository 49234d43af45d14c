/// Seeders used to populate an empty database
///
/// A seeder is an optional collaborator: the bootstrap routine probes for
/// one at startup with [`resolve_seeder`] and receives an explicit
/// `Option<Box<dyn Seeder>>`. When nothing is resolved it falls back to
/// creating the default administrator (see [`admin`]).
///
/// # Seeder Contract
///
/// Seeders must:
/// 1. Only be invoked against a database with no users
/// 2. Return a [`SeedReport`] describing what was created
/// 3. Leave the database unchanged when the report is unsuccessful
///
/// # Example
///
/// ```no_run
/// use ptsa_shared::seed::{Seeder, SeedError, SeedReport};
/// use async_trait::async_trait;
/// use sqlx::PgPool;
///
/// struct NoopSeeder;
///
/// #[async_trait]
/// impl Seeder for NoopSeeder {
///     fn name(&self) -> &str {
///         "noop"
///     }
///
///     async fn seed(&self, _pool: &PgPool) -> Result<SeedReport, SeedError> {
///         Ok(SeedReport::new(self.name()))
///     }
/// }
/// ```

pub mod admin;
pub mod comprehensive;

pub use comprehensive::ComprehensiveSeed;

use crate::auth::password::PasswordError;
use async_trait::async_trait;
use sqlx::PgPool;
use std::path::Path;
use tracing::{debug, warn};

/// Errors that stop a seeder before it can produce a report
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("Failed to read seed file")]
    Io(#[from] std::io::Error),

    /// Seed file is not valid JSON or has the wrong shape
    #[error("Invalid seed file")]
    Parse(#[from] serde_json::Error),

    /// Connection or transaction failure
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Outcome of a seeder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Name of the seeder that produced this report
    pub seeder: String,

    /// Companies committed to the database
    pub companies_created: usize,

    /// Users committed to the database
    pub users_created: usize,

    /// Record-level failures; any entry means nothing was persisted
    pub errors: Vec<String>,
}

impl SeedReport {
    pub fn new(seeder: impl Into<String>) -> Self {
        Self {
            seeder: seeder.into(),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A routine that populates an empty database
#[async_trait]
pub trait Seeder: Send + Sync {
    /// Seeder name (used in logs and reports)
    fn name(&self) -> &str;

    /// Populates the database
    ///
    /// Record-level problems go into the returned report; `Err` is reserved
    /// for failures that prevent the seeder from running at all.
    async fn seed(&self, pool: &PgPool) -> Result<SeedReport, SeedError>;
}

/// Probes for the comprehensive seed
///
/// Returns a seeder when `seed_file` is set and exists on disk. Whether the
/// file parses is only known when the seeder runs.
pub fn resolve_seeder(seed_file: Option<&Path>) -> Option<Box<dyn Seeder>> {
    let Some(path) = seed_file else {
        debug!("No seed file configured");
        return None;
    };

    if path.is_file() {
        debug!(path = %path.display(), "Comprehensive seed file found");
        Some(Box::new(ComprehensiveSeed::new(path)))
    } else {
        warn!(
            path = %path.display(),
            "No comprehensive seed file found"
        );
        None
    }
}
