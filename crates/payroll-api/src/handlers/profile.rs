//! Profile handler

use axum::{extract::State, Json};
use payroll_service::{EmployeeService, ProfileResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the authenticated user's employee profile with pending payout total
///
/// GET /profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = EmployeeService::new(state.service_context());
    let response = service.profile(auth.user_id).await?;
    Ok(Json(response))
}
