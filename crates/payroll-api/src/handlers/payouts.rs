//! Payout request handlers
//!
//! Creation is for employees; listing, detail, and processing are
//! accountant-only. History is visible to both, scoped in the service.

use axum::{
    extract::{Path, State},
    Json,
};
use payroll_service::{CreatePayoutRequest, PayoutRequestResponse, PayoutService};

use crate::extractors::{AuthUser, RequestIdPath, Sort};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List pending payout requests, sortable by amount or request time
///
/// GET /payout-requests?sort_by=amount&order=desc
pub async fn list_pending(
    State(state): State<AppState>,
    auth: AuthUser,
    Sort(sort): Sort,
) -> ApiResult<Json<Vec<PayoutRequestResponse>>> {
    let service = PayoutService::new(state.service_context());
    let response = service.list_pending(auth.user_id, sort).await?;
    Ok(Json(response))
}

/// Create a payout request against the caller's available earnings
///
/// POST /payout-requests
pub async fn create_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreatePayoutRequest>,
) -> ApiResult<Created<Json<PayoutRequestResponse>>> {
    let service = PayoutService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get one payout request
///
/// GET /payout-requests/{request_id}
pub async fn get_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
) -> ApiResult<Json<PayoutRequestResponse>> {
    let request_id = path.request_id()?;

    let service = PayoutService::new(state.service_context());
    let response = service.get(auth.user_id, request_id).await?;
    Ok(Json(response))
}

/// Process a pending payout request
///
/// POST /payout-requests/{request_id}/process
pub async fn process_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
) -> ApiResult<Json<PayoutRequestResponse>> {
    let request_id = path.request_id()?;

    let service = PayoutService::new(state.service_context());
    let response = service.process(auth.user_id, request_id).await?;
    Ok(Json(response))
}

/// Payout history (all processed requests for accountants, own for employees)
///
/// GET /payout-history?sort_by=requested_at&order=desc
pub async fn history(
    State(state): State<AppState>,
    auth: AuthUser,
    Sort(sort): Sort,
) -> ApiResult<Json<Vec<PayoutRequestResponse>>> {
    let service = PayoutService::new(state.service_context());
    let response = service.history(auth.user_id, sort).await?;
    Ok(Json(response))
}
