//! Employee handlers
//!
//! Administrative employee management; every operation here is
//! accountant-only (enforced in the service layer).

use axum::{
    extract::{Path, State},
    Json,
};
use payroll_service::{CreateEmployeeRequest, EmployeeResponse, EmployeeService, UpdateEmployeeRequest};

use crate::extractors::{AuthUser, EmployeeIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all employees, highest salary rate first
///
/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let service = EmployeeService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Create a new employee
///
/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateEmployeeRequest>,
) -> ApiResult<Created<Json<EmployeeResponse>>> {
    let service = EmployeeService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get one employee
///
/// GET /employees/{employee_id}
pub async fn get_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<EmployeeIdPath>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee_id = path.employee_id()?;

    let service = EmployeeService::new(state.service_context());
    let response = service.get(auth.user_id, employee_id).await?;
    Ok(Json(response))
}

/// Update an employee
///
/// PATCH /employees/{employee_id}
pub async fn update_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<EmployeeIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateEmployeeRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee_id = path.employee_id()?;

    let service = EmployeeService::new(state.service_context());
    let response = service.update(auth.user_id, employee_id, request).await?;
    Ok(Json(response))
}

/// Delete an employee (payout requests cascade, the user link is detached)
///
/// DELETE /employees/{employee_id}
pub async fn delete_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<EmployeeIdPath>,
) -> ApiResult<NoContent> {
    let employee_id = path.employee_id()?;

    let service = EmployeeService::new(state.service_context());
    service.delete(auth.user_id, employee_id).await?;
    Ok(NoContent)
}
