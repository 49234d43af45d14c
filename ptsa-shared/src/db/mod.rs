/// Database layer for PTSA
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with a startup health check
/// - `migrations`: Embedded schema migrations (the declared schema objects)
///
/// Models live in the `models` module at crate root level.
///
/// # Example
///
/// ```no_run
/// use ptsa_shared::db::pool::{create_pool, DatabaseConfig};
/// use ptsa_shared::db::migrations::run_migrations;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig::new(std::env::var("DATABASE_URL")?);
///     let pool = create_pool(config).await?;
///     run_migrations(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
