//! Product Repository

use super::{CatalogRepository, RepoError, RepoResult, value_taken};
use shared::models::{Product, ProductInput};
use shared::util::now_millis;
use sqlx::SqlitePool;

/// Validated product data plus the stored image path
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub input: ProductInput,
    pub image: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Case-insensitive name lookup, ignoring `exclude_id`
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(
            &self.pool,
            "product",
            "name_key",
            &name.to_lowercase(),
            exclude_id,
        )
        .await
    }

    fn price_cents(draft: &ProductDraft) -> RepoResult<i64> {
        draft
            .input
            .price_cents()
            .ok_or_else(|| RepoError::Validation(format!("Price out of range: {}", draft.input.price)))
    }
}

impl CatalogRepository for ProductRepository {
    type Entity = Product;
    type Draft = ProductDraft;

    async fn count(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price_cents, tax_rate, image, created_at, updated_at \
             FROM product ORDER BY name, id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price_cents, tax_rate, image, created_at, updated_at \
             FROM product WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn create(&self, draft: &ProductDraft) -> RepoResult<Product> {
        let price_cents = Self::price_cents(draft)?;
        let now = now_millis();
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO product (name, name_key, description, price_cents, tax_rate, image, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, name, description, price_cents, tax_rate, image, created_at, updated_at",
        )
        .bind(&draft.input.name)
        .bind(draft.input.name_key())
        .bind(&draft.input.description)
        .bind(price_cents)
        .bind(i64::from(draft.input.tax_rate))
        .bind(draft.image.as_deref())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    async fn update(&self, id: i64, draft: &ProductDraft) -> RepoResult<Product> {
        let price_cents = Self::price_cents(draft)?;
        let product = sqlx::query_as::<_, Product>(
            "UPDATE product SET name = ?, name_key = ?, description = ?, price_cents = ?, \
             tax_rate = ?, image = ?, updated_at = ? WHERE id = ? \
             RETURNING id, name, description, price_cents, tax_rate, image, created_at, updated_at",
        )
        .bind(&draft.input.name)
        .bind(draft.input.name_key())
        .bind(&draft.input.description)
        .bind(price_cents)
        .bind(i64::from(draft.input.tax_rate))
        .bind(draft.image.as_deref())
        .bind(now_millis())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        product.ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "DELETE FROM product WHERE id = ? \
             RETURNING id, name, description, price_cents, tax_rate, image, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM product").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
