//! Employee Repository

use super::{CatalogRepository, RepoError, RepoResult, value_taken};
use shared::models::{Employee, EmployeeInput};
use shared::util::now_millis;
use sqlx::SqlitePool;

/// Validated employee data plus the stored photo path
#[derive(Debug, Clone)]
pub struct EmployeeDraft {
    pub input: EmployeeInput,
    pub image: Option<String>,
}

#[derive(Clone, Debug)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn email_taken(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "employee", "email", email, exclude_id).await
    }

    pub async fn cedula_taken(&self, cedula: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "employee", "cedula", cedula, exclude_id).await
    }

    pub async fn code_taken(&self, code: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "employee", "employee_code", code, exclude_id).await
    }
}

impl CatalogRepository for EmployeeRepository {
    type Entity = Employee;
    type Draft = EmployeeDraft;

    async fn count(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email, cedula, employee_code, employee_type, image, created_at, updated_at \
             FROM employee ORDER BY last_name, first_name, id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email, cedula, employee_code, employee_type, image, created_at, updated_at \
             FROM employee WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn create(&self, draft: &EmployeeDraft) -> RepoResult<Employee> {
        let input = &draft.input;
        let now = now_millis();
        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employee (first_name, last_name, email, cedula, employee_code, employee_type, image, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, first_name, last_name, email, cedula, employee_code, employee_type, image, created_at, updated_at",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.cedula)
        .bind(&input.employee_code)
        .bind(&input.employee_type)
        .bind(draft.image.as_deref())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn update(&self, id: i64, draft: &EmployeeDraft) -> RepoResult<Employee> {
        let input = &draft.input;
        let employee = sqlx::query_as::<_, Employee>(
            "UPDATE employee SET first_name = ?, last_name = ?, email = ?, cedula = ?, \
             employee_code = ?, employee_type = ?, image = ?, updated_at = ? WHERE id = ? \
             RETURNING id, first_name, last_name, email, cedula, employee_code, employee_type, image, created_at, updated_at",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.cedula)
        .bind(&input.employee_code)
        .bind(&input.employee_type)
        .bind(draft.image.as_deref())
        .bind(now_millis())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        employee.ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "DELETE FROM employee WHERE id = ? \
             RETURNING id, first_name, last_name, email, cedula, employee_code, employee_type, image, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM employee").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
