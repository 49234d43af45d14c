/// Comprehensive seed loaded from a JSON file
///
/// # File Format
///
/// ```json
/// {
///   "companies": [
///     { "name": "Acme Training", "registration_number": "2019/123456/07",
///       "contact_email": "hello@acme.example" }
///   ],
///   "users": [
///     { "email": "info@ptsa.co.za", "password": "info123", "role": "admin" },
///     { "email": "manager@acme.example", "password": "changeme",
///       "role": "manager", "company": "Acme Training" }
///   ]
/// }
/// ```
///
/// `is_active` defaults to `true` for both companies and users, and `role`
/// defaults to `user`. A user's `company` refers to a company by name and
/// must be declared in the same file.
///
/// Every record is validated before anything is written. Inserts run in one
/// transaction; the first failure rolls everything back.

use super::{SeedError, SeedReport, Seeder};
use crate::auth::password::hash_password;
use crate::models::company::{Company, CreateCompany};
use crate::models::user::{CreateUser, User, UserRole};
use async_trait::async_trait;
use serde::Deserialize;
use sqlx::PgPool;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

fn default_true() -> bool {
    true
}

fn default_role() -> UserRole {
    UserRole::User
}

/// Contents of a seed file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub companies: Vec<SeedCompany>,

    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SeedCompany {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(max = 64))]
    pub registration_number: Option<String>,

    #[validate(email)]
    pub contact_email: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SeedUser {
    #[validate(email)]
    pub email: String,

    /// Plaintext; hashed before insert
    #[validate(length(min = 6, max = 128))]
    pub password: String,

    #[serde(default = "default_role")]
    pub role: UserRole,

    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Name of a company declared in the same file
    pub company: Option<String>,
}

impl From<SeedCompany> for CreateCompany {
    fn from(company: SeedCompany) -> Self {
        CreateCompany {
            name: company.name,
            registration_number: company.registration_number,
            contact_email: company.contact_email,
            is_active: company.is_active,
        }
    }
}

impl SeedData {
    /// Parses seed data from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks every record and cross-reference without touching the database
    ///
    /// Returns one message per problem, prefixed with the record's position.
    pub fn validate_records(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut names = HashMap::new();

        for (i, company) in self.companies.iter().enumerate() {
            if let Err(e) = company.validate() {
                errors.push(format!("companies[{}] ({}): {}", i, company.name, e));
            }
            if names.insert(company.name.as_str(), i).is_some() {
                errors.push(format!(
                    "companies[{}] ({}): duplicate company name",
                    i, company.name
                ));
            }
        }

        let mut emails = HashMap::new();
        for (i, user) in self.users.iter().enumerate() {
            if let Err(e) = user.validate() {
                errors.push(format!("users[{}] ({}): {}", i, user.email, e));
            }
            if emails.insert(user.email.to_lowercase(), i).is_some() {
                errors.push(format!("users[{}] ({}): duplicate email", i, user.email));
            }
            if let Some(company) = &user.company {
                if !names.contains_key(company.as_str()) {
                    errors.push(format!(
                        "users[{}] ({}): unknown company '{}'",
                        i, user.email, company
                    ));
                }
            }
        }

        errors
    }
}

/// Seeder backed by a JSON seed file
#[derive(Debug, Clone)]
pub struct ComprehensiveSeed {
    path: PathBuf,
}

impl ComprehensiveSeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the seed file
    pub async fn load(&self) -> Result<SeedData, SeedError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        SeedData::from_json(&contents)
    }

    async fn insert(
        &self,
        pool: &PgPool,
        data: SeedData,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        let mut tx = pool.begin().await?;
        let mut company_ids: HashMap<String, Uuid> = HashMap::new();
        let mut companies_created = 0;
        let mut users_created = 0;

        for company in data.companies {
            let name = company.name.clone();
            match Company::create(&mut *tx, company.into()).await {
                Ok(created) => {
                    debug!(company = %created.name, "Seeded company");
                    company_ids.insert(created.name, created.id);
                    companies_created += 1;
                }
                Err(e) => {
                    report.errors.push(format!("company '{}': {}", name, e));
                    tx.rollback().await?;
                    return Ok(());
                }
            }
        }

        for user in data.users {
            let company_id = user
                .company
                .as_ref()
                .and_then(|name| company_ids.get(name).copied());

            let create = CreateUser {
                email: user.email.clone(),
                password_hash: hash_password(&user.password)?,
                role: user.role,
                is_active: user.is_active,
                company_id,
            };

            match User::create(&mut *tx, create).await {
                Ok(created) => {
                    debug!(email = %created.email, role = %created.role, "Seeded user");
                    users_created += 1;
                }
                Err(e) => {
                    report.errors.push(format!("user '{}': {}", user.email, e));
                    tx.rollback().await?;
                    return Ok(());
                }
            }
        }

        tx.commit().await?;

        report.companies_created = companies_created;
        report.users_created = users_created;
        Ok(())
    }
}

#[async_trait]
impl Seeder for ComprehensiveSeed {
    fn name(&self) -> &str {
        "comprehensive_seed"
    }

    async fn seed(&self, pool: &PgPool) -> Result<SeedReport, SeedError> {
        info!(path = %self.path.display(), "Loading comprehensive seed");

        let data = self.load().await?;
        let mut report = SeedReport::new(self.name());

        report.errors = data.validate_records();
        if !report.is_success() {
            for error in &report.errors {
                warn!("Invalid seed record: {}", error);
            }
            return Ok(report);
        }

        if data.users.is_empty() {
            report
                .errors
                .push("seed file declares no users".to_string());
            return Ok(report);
        }

        self.insert(pool, data, &mut report).await?;

        if report.is_success() {
            info!(
                companies = report.companies_created,
                users = report.users_created,
                "Comprehensive seed committed"
            );
        } else {
            warn!(errors = report.errors.len(), "Comprehensive seed rolled back");
        }

        Ok(report)
    }
}
