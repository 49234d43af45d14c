/// Fallback administrator
///
/// When no comprehensive seed is available, an empty database receives a
/// single active admin so the application can be signed into right after
/// deployment.

use crate::auth::password::hash_password;
use crate::error::InitResult;
use crate::models::user::{CreateUser, User, UserRole};
use sqlx::PgPool;
use tracing::info;

/// Email of the fallback administrator
pub const DEFAULT_ADMIN_EMAIL: &str = "info@ptsa.co.za";

/// Initial password of the fallback administrator (stored hashed)
pub const DEFAULT_ADMIN_PASSWORD: &str = "info123";

/// Builds the insert payload for the fallback administrator
pub fn default_admin() -> InitResult<CreateUser> {
    Ok(CreateUser {
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        password_hash: hash_password(DEFAULT_ADMIN_PASSWORD)?,
        role: UserRole::Admin,
        is_active: true,
        company_id: None,
    })
}

/// Inserts the fallback administrator and commits it
///
/// # Errors
///
/// Fails if hashing fails, or if the insert violates a constraint (e.g. the
/// email already exists).
pub async fn create_default_admin(pool: &PgPool) -> InitResult<User> {
    let admin = User::create(pool, default_admin()?).await?;

    info!(user_id = %admin.id, email = %admin.email, "Default admin inserted");
    Ok(admin)
}
