//! Employee entity <-> model mapper

use payroll_core::entities::Employee;
use payroll_core::Snowflake;

use crate::models::EmployeeModel;

/// Convert EmployeeModel to Employee entity
impl From<EmployeeModel> for Employee {
    fn from(model: EmployeeModel) -> Self {
        Employee {
            id: Snowflake::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            position: model.position,
            salary_rate: model.salary_rate,
            hire_date: model.hire_date,
            is_active: model.is_active,
            available_earnings: model.available_earnings,
            employee_code: model.employee_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
