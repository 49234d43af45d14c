/// Database models for PTSA
///
/// # Models
///
/// - `user`: User accounts and roles
/// - `company`: Companies that users can belong to
///
/// # Example
///
/// ```no_run
/// use ptsa_shared::models::user::{CreateUser, User, UserRole};
/// use ptsa_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::new("postgresql://localhost/ptsa")).await?;
///
/// if !User::exists_any(&pool).await? {
///     let user = User::create(&pool, CreateUser {
///         email: "user@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///         role: UserRole::User,
///         is_active: true,
///         company_id: None,
///     }).await?;
///     println!("Created user {}", user.id);
/// }
/// # Ok(())
/// # }
/// ```

pub mod company;
pub mod user;
