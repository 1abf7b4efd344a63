use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::{
    CompanyRepository, EmployeeRepository, ProductRepository, SupplierRepository,
};
use crate::services::MediaStore;

/// Server state - shared handles for every request handler
///
/// Cloning is cheap: the pool is reference counted and the rest is small
/// immutable configuration.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Immutable configuration |
/// | pool | SqlitePool | SQLite connection pool |
/// | media | MediaStore | Uploaded image storage |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub media: MediaStore,
}

impl ServerState {
    /// Prepare directories, open the database and run migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        if config.max_upload_bytes == 0 {
            return Err(ServerError::Config(
                "MAX_UPLOAD_BYTES must be greater than zero".into(),
            ));
        }

        std::fs::create_dir_all(config.work_dir())?;
        if let Some(parent) = config.database_path().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = DbService::new(&config.database_path()).await?;

        let media = MediaStore::new(config.media_dir(), config.max_upload_bytes);
        media.ensure_dirs()?;

        tracing::info!(
            work_dir = %config.work_dir,
            media_dir = %config.media_dir().display(),
            "Server state initialized"
        );

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            media,
        })
    }

    pub fn companies(&self) -> CompanyRepository {
        CompanyRepository::new(self.pool.clone())
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    pub fn suppliers(&self) -> SupplierRepository {
        SupplierRepository::new(self.pool.clone())
    }

    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.pool.clone())
    }
}
