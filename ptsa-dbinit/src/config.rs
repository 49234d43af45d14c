/// Configuration management for the database initializer
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5)
/// - `DATABASE_CONNECT_TIMEOUT_SECONDS`: Acquire timeout (default: 30)
/// - `DATABASE_CREATE_IF_MISSING`: Create the database first (default: false)
/// - `SEED_FILE`: Comprehensive seed file (default: comprehensive_seed.json)
/// - `RUST_LOG`: Log filter (default: ptsa_dbinit=info,ptsa_shared=info)
///
/// A `.env` file in the working directory is loaded first if present.
///
/// # Example
///
/// ```no_run
/// use ptsa_dbinit::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Seed file: {:?}", config.seed_file);
/// # Ok(())
/// # }
/// ```

use ptsa_shared::bootstrap::InitConfig;
use ptsa_shared::db::pool::DatabaseConfig;
use std::env;
use std::path::PathBuf;

/// Seed file looked up when `SEED_FILE` is not set
pub const DEFAULT_SEED_FILE: &str = "comprehensive_seed.json";

/// Complete initializer configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,

    /// Pool acquire timeout in seconds
    pub connect_timeout_seconds: u64,

    /// Whether to create the database when it does not exist
    pub create_database_if_missing: bool,

    /// Path probed for the comprehensive seed
    pub seed_file: PathBuf,
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a numeric/boolean
    /// variable cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .map_err(|e| anyhow::anyhow!("Invalid DATABASE_MAX_CONNECTIONS: {}", e))?;

        if max_connections == 0 {
            anyhow::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let connect_timeout_seconds = lookup("DATABASE_CONNECT_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("Invalid DATABASE_CONNECT_TIMEOUT_SECONDS: {}", e))?;

        let create_database_if_missing = match lookup("DATABASE_CREATE_IF_MISSING") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                anyhow::anyhow!("Invalid DATABASE_CREATE_IF_MISSING: {}", value)
            })?,
            None => false,
        };

        let seed_file = lookup("SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SEED_FILE.to_string());

        Ok(Self {
            database_url,
            max_connections,
            connect_timeout_seconds,
            create_database_if_missing,
            seed_file: PathBuf::from(seed_file),
        })
    }

    /// Converts to the settings consumed by the bootstrap routine
    pub fn init_config(&self) -> InitConfig {
        InitConfig {
            database: DatabaseConfig {
                url: self.database_url.clone(),
                max_connections: self.max_connections,
                min_connections: 1,
                connect_timeout_seconds: self.connect_timeout_seconds,
                ..Default::default()
            },
            create_database_if_missing: self.create_database_if_missing,
            seed_file: Some(self.seed_file.clone()),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
