//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use payroll_core::entities::{Employee, PayoutRequest, PayoutStatus, User};

use super::responses::{CurrentUserResponse, EmployeeResponse, PayoutRequestResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl CurrentUserResponse {
    /// Build the response for a user; the role flag comes from the
    /// membership table, not the entity
    pub fn from_user(user: &User, is_accountant: bool) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            employee_id: user.employee_id.map(|id| id.to_string()),
            is_accountant,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Employee Mappers
// ============================================================================

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            position: employee.position.clone(),
            salary_rate: employee.salary_rate,
            hire_date: employee.hire_date,
            is_active: employee.is_active,
            available_earnings: employee.available_earnings,
            employee_code: employee.employee_code.clone(),
            created_at: employee.created_at,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self::from(&employee)
    }
}

// ============================================================================
// Payout Mappers
// ============================================================================

fn status_name(status: PayoutStatus) -> &'static str {
    match status {
        PayoutStatus::Pending => "pending",
        PayoutStatus::Processed => "processed",
    }
}

impl From<&PayoutRequest> for PayoutRequestResponse {
    fn from(request: &PayoutRequest) -> Self {
        Self {
            id: request.id.to_string(),
            employee_id: request.employee_id.to_string(),
            amount: request.amount,
            status: status_name(request.status),
            requested_at: request.requested_at,
            processed_at: request.processed_at,
        }
    }
}

impl From<PayoutRequest> for PayoutRequestResponse {
    fn from(request: PayoutRequest) -> Self {
        Self::from(&request)
    }
}
