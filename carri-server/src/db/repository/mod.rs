//! Repository Module
//!
//! CRUD operations over the SQLite tables. Catalog entities (products,
//! suppliers, employees) share the [`CatalogRepository`] interface; the
//! company singleton has its own [`CompanyRepository`].

pub mod company;
pub mod employee;
pub mod product;
pub mod supplier;

// Re-exports
pub use company::{CompanyDraft, CompanyRepository};
pub use employee::{EmployeeDraft, EmployeeRepository};
pub use product::{ProductDraft, ProductRepository};
pub use supplier::SupplierRepository;

use shared::error::{AppError, ErrorCode};
use sqlx::SqlitePool;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint violation; carries the `table.column` target
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl RepoError {
    /// Whether this is a unique violation on `table.column`
    pub fn is_duplicate_of(&self, target: &str) -> bool {
        matches!(self, RepoError::Duplicate(t) if t == target)
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message();
            if db_err.is_unique_violation() || message.starts_with("UNIQUE constraint failed") {
                // "UNIQUE constraint failed: product.name_key"
                let target = message.rsplit(": ").next().unwrap_or(message);
                return RepoError::Duplicate(target.to_string());
            }
            if db_err.is_check_violation() {
                return RepoError::Validation(message.to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(resource) => AppError::not_found(resource),
            RepoError::Duplicate(target) => {
                AppError::new(duplicate_code(&target)).with_detail("constraint", target)
            }
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Error code for a unique violation on `table.column`
fn duplicate_code(target: &str) -> ErrorCode {
    match target {
        "company.id" => ErrorCode::CompanyAlreadyExists,
        "company.ruc" => ErrorCode::CompanyRucExists,
        "product.name_key" => ErrorCode::ProductNameExists,
        "supplier.name_key" => ErrorCode::SupplierNameExists,
        "supplier.email" => ErrorCode::SupplierEmailExists,
        "employee.email" => ErrorCode::EmployeeEmailExists,
        "employee.cedula" => ErrorCode::EmployeeCedulaExists,
        "employee.employee_code" => ErrorCode::EmployeeCodeExists,
        _ => ErrorCode::AlreadyExists,
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common interface of the paginated catalogs
#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    /// Persisted row type
    type Entity;
    /// Validated data written by create/update
    type Draft;

    async fn count(&self) -> RepoResult<i64>;
    /// One page in display order
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Self::Entity>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Self::Entity>>;
    async fn create(&self, draft: &Self::Draft) -> RepoResult<Self::Entity>;
    /// Replace every editable column; `NotFound` when the id does not exist
    async fn update(&self, id: i64, draft: &Self::Draft) -> RepoResult<Self::Entity>;
    /// Remove a row, returning it (`None` when it did not exist)
    async fn delete(&self, id: i64) -> RepoResult<Option<Self::Entity>>;
    async fn delete_all(&self) -> RepoResult<u64>;
}

/// Whether `table.column = value` exists on a row other than `exclude_id`.
///
/// `table` and `column` are compile-time identifiers, never user input.
pub(crate) async fn value_taken(
    pool: &SqlitePool,
    table: &'static str,
    column: &'static str,
    value: &str,
    exclude_id: Option<i64>,
) -> RepoResult<bool> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE {column} = ? AND id != ?)");
    let taken: bool = sqlx::query_scalar(&sql)
        .bind(value)
        .bind(exclude_id.unwrap_or(0))
        .fetch_one(pool)
        .await?;
    Ok(taken)
}

/// Table whose rows store images under the path's media subdirectory
fn image_table(path: &str) -> Option<&'static str> {
    match path.split('/').next()? {
        "empresa" => Some("company"),
        "productos" => Some("product"),
        "trabajadores" => Some("employee"),
        _ => None,
    }
}

/// Whether any row still points at the stored image `path`
///
/// Identical uploads share one content-hashed file, so a file may only be
/// removed once no row references it.
pub async fn image_in_use(pool: &SqlitePool, path: &str) -> RepoResult<bool> {
    let Some(table) = image_table(path) else {
        return Ok(false);
    };
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE image = ?)");
    let used: bool = sqlx::query_scalar(&sql).bind(path).fetch_one(pool).await?;
    Ok(used)
}
