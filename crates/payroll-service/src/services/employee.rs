//! Employee service
//!
//! Administrative employee management (accountant-only) and the
//! self-service profile view.

use payroll_core::entities::Employee;
use payroll_core::{DomainError, Snowflake};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::dto::{CreateEmployeeRequest, EmployeeResponse, ProfileResponse, UpdateEmployeeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::role::RoleService;

/// Employee service
pub struct EmployeeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmployeeService<'a> {
    /// Create a new EmployeeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new employee record (accountant-only)
    #[instrument(skip(self, request), fields(position = %request.position))]
    pub async fn create(
        &self,
        acting_user: Snowflake,
        request: CreateEmployeeRequest,
    ) -> ServiceResult<EmployeeResponse> {
        RoleService::new(self.ctx)
            .require_accountant(acting_user)
            .await?;

        if request.salary_rate < Decimal::ZERO {
            return Err(ServiceError::validation("Salary rate cannot be negative"));
        }

        let mut employee = Employee::new(
            self.ctx.generate_id(),
            request.first_name,
            request.last_name,
            request.position,
            request.salary_rate,
            request.hire_date,
        );
        employee.is_active = request.is_active;

        self.ctx.employee_repo().create(&employee).await?;

        info!(employee_id = %employee.id, "Employee created");

        Ok(EmployeeResponse::from(&employee))
    }

    /// List all employees, highest salary rate first (accountant-only)
    #[instrument(skip(self))]
    pub async fn list(&self, acting_user: Snowflake) -> ServiceResult<Vec<EmployeeResponse>> {
        RoleService::new(self.ctx)
            .require_accountant(acting_user)
            .await?;

        let employees = self.ctx.employee_repo().list().await?;
        Ok(employees.iter().map(EmployeeResponse::from).collect())
    }

    /// Get one employee record (accountant-only)
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        acting_user: Snowflake,
        employee_id: Snowflake,
    ) -> ServiceResult<EmployeeResponse> {
        RoleService::new(self.ctx)
            .require_accountant(acting_user)
            .await?;

        let employee = self
            .ctx
            .employee_repo()
            .find_by_id(employee_id)
            .await?
            .ok_or(DomainError::EmployeeNotFound(employee_id))?;

        Ok(EmployeeResponse::from(&employee))
    }

    /// Update an employee record (accountant-only)
    ///
    /// Setting `available_earnings` is the administrative grant path
    /// into the ledger; it may never go negative.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        acting_user: Snowflake,
        employee_id: Snowflake,
        request: UpdateEmployeeRequest,
    ) -> ServiceResult<EmployeeResponse> {
        RoleService::new(self.ctx)
            .require_accountant(acting_user)
            .await?;

        let mut employee = self
            .ctx
            .employee_repo()
            .find_by_id(employee_id)
            .await?
            .ok_or(DomainError::EmployeeNotFound(employee_id))?;

        if let Some(first_name) = request.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            employee.last_name = last_name;
        }
        if let Some(position) = request.position {
            employee.position = position;
        }
        if let Some(salary_rate) = request.salary_rate {
            if salary_rate < Decimal::ZERO {
                return Err(ServiceError::validation("Salary rate cannot be negative"));
            }
            employee.salary_rate = salary_rate;
        }
        if let Some(is_active) = request.is_active {
            employee.is_active = is_active;
        }
        if let Some(available_earnings) = request.available_earnings {
            if available_earnings < Decimal::ZERO {
                return Err(DomainError::NegativeEarnings.into());
            }
            employee.available_earnings = available_earnings;
        }

        self.ctx.employee_repo().update(&employee).await?;

        info!(employee_id = %employee.id, "Employee updated");

        Ok(EmployeeResponse::from(&employee))
    }

    /// Delete an employee record (accountant-only)
    ///
    /// Payout requests cascade; a linked user account is detached.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        acting_user: Snowflake,
        employee_id: Snowflake,
    ) -> ServiceResult<()> {
        RoleService::new(self.ctx)
            .require_accountant(acting_user)
            .await?;

        self.ctx.employee_repo().delete(employee_id).await?;

        info!(employee_id = %employee_id, "Employee deleted");

        Ok(())
    }

    /// Profile for the authenticated user: their linked employee record
    /// plus the sum of their pending payout amounts
    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let employee_id = user
            .employee_id
            .ok_or_else(|| ServiceError::not_found("Employee", "linked to current user"))?;

        let employee = self
            .ctx
            .employee_repo()
            .find_by_id(employee_id)
            .await?
            .ok_or(DomainError::EmployeeNotFound(employee_id))?;

        let total_pending_amount = self.ctx.payout_repo().pending_total(employee_id).await?;

        Ok(ProfileResponse {
            employee: EmployeeResponse::from(&employee),
            total_pending_amount,
        })
    }
}
