//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs and Decimal amounts are serialized as strings for
//! JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            ready: database,
            database,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub is_accountant: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Employee Responses
// ============================================================================

/// Employee record as seen by accountants and the owning user
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub salary_rate: Decimal,
    pub hire_date: NaiveDate,
    pub is_active: bool,
    pub available_earnings: Decimal,
    pub employee_code: String,
    pub created_at: DateTime<Utc>,
}

/// Employee profile: the linked record plus pending payout exposure
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub employee: EmployeeResponse,
    pub total_pending_amount: Decimal,
}

// ============================================================================
// Payout Responses
// ============================================================================

/// A payout request with its lifecycle state
#[derive(Debug, Clone, Serialize)]
pub struct PayoutRequestResponse {
    pub id: String,
    pub employee_id: String,
    pub amount: Decimal,
    pub status: &'static str,
    pub requested_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}
