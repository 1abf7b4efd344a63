//! Company Repository
//!
//! The company table holds at most one row, pinned to [`COMPANY_ID`] by a
//! `CHECK (id = 1)` constraint.

use super::{RepoError, RepoResult, value_taken};
use shared::models::{Company, CompanyInput};
use shared::util::now_millis;
use sqlx::SqlitePool;

/// Primary key of the singleton row
pub const COMPANY_ID: i64 = 1;

/// Validated company data plus the stored logo path
#[derive(Debug, Clone)]
pub struct CompanyDraft {
    pub input: CompanyInput,
    pub image: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CompanyRepository {
    pool: SqlitePool,
}

impl CompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> RepoResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT id, name, address, mission, vision, founding_year, ruc, image, created_at, updated_at \
             FROM company WHERE id = ?",
        )
        .bind(COMPANY_ID)
        .fetch_optional(&self.pool)
        .await?;
        Ok(company)
    }

    pub async fn exists(&self) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM company)")
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn ruc_taken(&self, ruc: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "company", "ruc", ruc, exclude_id).await
    }

    /// Insert the singleton row.
    ///
    /// A second insert violates the primary key and surfaces as
    /// `Duplicate("company.id")`.
    pub async fn create(&self, draft: &CompanyDraft) -> RepoResult<Company> {
        let input = &draft.input;
        let now = now_millis();
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO company (id, name, address, mission, vision, founding_year, ruc, image, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, name, address, mission, vision, founding_year, ruc, image, created_at, updated_at",
        )
        .bind(COMPANY_ID)
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.mission)
        .bind(&input.vision)
        .bind(input.founding_year)
        .bind(&input.ruc)
        .bind(draft.image.as_deref())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(company)
    }

    pub async fn update(&self, draft: &CompanyDraft) -> RepoResult<Company> {
        let input = &draft.input;
        let company = sqlx::query_as::<_, Company>(
            "UPDATE company SET name = ?, address = ?, mission = ?, vision = ?, founding_year = ?, \
             ruc = ?, image = ?, updated_at = ? WHERE id = ? \
             RETURNING id, name, address, mission, vision, founding_year, ruc, image, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.mission)
        .bind(&input.vision)
        .bind(input.founding_year)
        .bind(&input.ruc)
        .bind(draft.image.as_deref())
        .bind(now_millis())
        .bind(COMPANY_ID)
        .fetch_optional(&self.pool)
        .await?;
        company.ok_or_else(|| RepoError::NotFound("Company not found".to_string()))
    }

    /// Remove the singleton so it can be created again
    pub async fn delete(&self) -> RepoResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "DELETE FROM company WHERE id = ? \
             RETURNING id, name, address, mission, vision, founding_year, ruc, image, created_at, updated_at",
        )
        .bind(COMPANY_ID)
        .fetch_optional(&self.pool)
        .await?;
        Ok(company)
    }
}
