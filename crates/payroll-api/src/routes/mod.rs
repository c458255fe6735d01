//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, employees, health, payouts, profile};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(employee_routes())
        .merge(payout_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::current_user))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(profile::get_profile))
}

/// Employee administration routes (accountant-only, checked in services)
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(employees::list_employees))
        .route("/employees", post(employees::create_employee))
        .route("/employees/:employee_id", get(employees::get_employee))
        .route("/employees/:employee_id", patch(employees::update_employee))
        .route("/employees/:employee_id", delete(employees::delete_employee))
}

/// Payout lifecycle routes
fn payout_routes() -> Router<AppState> {
    Router::new()
        .route("/payout-requests", get(payouts::list_pending))
        .route("/payout-requests", post(payouts::create_request))
        .route("/payout-requests/:request_id", get(payouts::get_request))
        .route(
            "/payout-requests/:request_id/process",
            post(payouts::process_request),
        )
        .route("/payout-history", get(payouts::history))
}
