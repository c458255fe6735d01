//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user input
//! also implement `Validate`. Monetary and cross-field rules (amount
//! positivity, balance caps, password confirmation) are enforced in the
//! service layer, which is the authoritative validation point.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request; the employee code links the new account
/// to an existing employee record
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,

    #[validate(length(equal = 10, message = "Employee code must be 10 characters"))]
    pub employee_code: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    pub confirm_password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke; revokes all when absent)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Employee Requests
// ============================================================================

/// Create employee request (accountant-only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 100, message = "Position must be 1-100 characters"))]
    pub position: String,

    pub salary_rate: Decimal,

    pub hire_date: NaiveDate,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

/// Update employee request (accountant-only); absent fields are unchanged.
/// `available_earnings` is the administrative grant path into the ledger.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Position must be 1-100 characters"))]
    pub position: Option<String>,

    pub salary_rate: Option<Decimal>,

    pub is_active: Option<bool>,

    pub available_earnings: Option<Decimal>,
}

// ============================================================================
// Payout Requests
// ============================================================================

/// Create payout request (employee-only)
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayoutRequest {
    pub amount: Decimal,
}
