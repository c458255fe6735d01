//! PostgreSQL implementation of EmployeeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use payroll_core::entities::Employee;
use payroll_core::traits::{EmployeeRepository, RepoResult};
use payroll_core::value_objects::Snowflake;

use crate::models::EmployeeModel;

use super::error::{employee_not_found, map_db_error};

/// PostgreSQL implementation of EmployeeRepository
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Create a new PgEmployeeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Employee>> {
        let result = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, first_name, last_name, position, salary_rate, hire_date,
                   is_active, available_earnings, employee_code, created_at, updated_at
            FROM employees
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Employee::from))
    }

    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Employee>> {
        let result = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, first_name, last_name, position, salary_rate, hire_date,
                   is_active, available_earnings, employee_code, created_at, updated_at
            FROM employees
            WHERE employee_code = $1
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Employee::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Employee>> {
        let results = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT id, first_name, last_name, position, salary_rate, hire_date,
                   is_active, available_earnings, employee_code, created_at, updated_at
            FROM employees
            ORDER BY salary_rate DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Employee::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, employee: &Employee) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO employees (id, first_name, last_name, position, salary_rate, hire_date,
                                   is_active, available_earnings, employee_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(employee.id.into_inner())
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.position)
        .bind(employee.salary_rate)
        .bind(employee.hire_date)
        .bind(employee.is_active)
        .bind(employee.available_earnings)
        .bind(&employee.employee_code)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, employee: &Employee) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE employees
            SET first_name = $2, last_name = $3, position = $4, salary_rate = $5,
                hire_date = $6, is_active = $7, available_earnings = $8, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(employee.id.into_inner())
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.position)
        .bind(employee.salary_rate)
        .bind(employee.hire_date)
        .bind(employee.is_active)
        .bind(employee.available_earnings)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(employee_not_found(employee.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Payout requests cascade and the linked user is detached (schema FKs)
        let result = sqlx::query(
            r"
            DELETE FROM employees WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(employee_not_found(id));
        }

        Ok(())
    }
}
