/// Company model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE companies (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL UNIQUE,
///     registration_number VARCHAR(64),
///     contact_email CITEXT,
///     is_active BOOLEAN NOT NULL DEFAULT TRUE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

/// Company registered with the authority
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub id: Uuid,

    /// Display name, unique across companies
    pub name: String,

    /// Company registration number, if known
    pub registration_number: Option<String>,

    /// Contact address for the company
    pub contact_email: Option<String>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub registration_number: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: bool,
}

impl Company {
    /// Inserts a new company
    ///
    /// # Errors
    ///
    /// Returns an error if a company with the same name exists or the
    /// connection fails.
    pub async fn create<'e, E>(executor: E, data: CreateCompany) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, registration_number, contact_email, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, registration_number, contact_email, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.registration_number)
        .bind(data.contact_email)
        .bind(data.is_active)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Company>(
            r#"
            SELECT id, name, registration_number, contact_email, is_active,
                   created_at, updated_at
            FROM companies
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM companies")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
