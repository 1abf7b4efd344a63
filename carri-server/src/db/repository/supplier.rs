//! Supplier Repository

use super::{CatalogRepository, RepoError, RepoResult, value_taken};
use shared::models::{Supplier, SupplierInput};
use shared::util::now_millis;
use sqlx::SqlitePool;

#[derive(Clone, Debug)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn name_taken(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(
            &self.pool,
            "supplier",
            "name_key",
            &name.to_lowercase(),
            exclude_id,
        )
        .await
    }

    /// Emails are stored lower-cased, so an exact match is case-insensitive
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "supplier", "email", email, exclude_id).await
    }
}

impl CatalogRepository for SupplierRepository {
    type Entity = Supplier;
    type Draft = SupplierInput;

    async fn count(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM supplier")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, description, phone, country, email, address, created_at, updated_at \
             FROM supplier ORDER BY name, id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(suppliers)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, description, phone, country, email, address, created_at, updated_at \
             FROM supplier WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(supplier)
    }

    async fn create(&self, input: &SupplierInput) -> RepoResult<Supplier> {
        let now = now_millis();
        let supplier = sqlx::query_as::<_, Supplier>(
            "INSERT INTO supplier (name, name_key, description, phone, country, email, address, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, name, description, phone, country, email, address, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(input.name_key())
        .bind(&input.description)
        .bind(&input.phone)
        .bind(&input.country)
        .bind(&input.email)
        .bind(&input.address)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(supplier)
    }

    async fn update(&self, id: i64, input: &SupplierInput) -> RepoResult<Supplier> {
        let supplier = sqlx::query_as::<_, Supplier>(
            "UPDATE supplier SET name = ?, name_key = ?, description = ?, phone = ?, country = ?, \
             email = ?, address = ?, updated_at = ? WHERE id = ? \
             RETURNING id, name, description, phone, country, email, address, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(input.name_key())
        .bind(&input.description)
        .bind(&input.phone)
        .bind(&input.country)
        .bind(&input.email)
        .bind(&input.address)
        .bind(now_millis())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        supplier.ok_or_else(|| RepoError::NotFound(format!("Supplier {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(
            "DELETE FROM supplier WHERE id = ? \
             RETURNING id, name, description, phone, country, email, address, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(supplier)
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM supplier").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
