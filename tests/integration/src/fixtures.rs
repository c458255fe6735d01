//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Monetary amounts
//! travel as strings, matching the API's Decimal serialization.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub employee_code: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    /// Unique registration against the given employee code
    pub fn for_code(employee_code: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            employee_code: employee_code.to_string(),
            password: "TestPass123".to_string(),
            confirm_password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub employee_id: Option<String>,
    pub is_accountant: bool,
    pub created_at: String,
}

/// Create employee request
#[derive(Debug, Serialize)]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub salary_rate: String,
    pub hire_date: String,
    pub is_active: bool,
}

impl CreateEmployeeRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "New".to_string(),
            last_name: format!("Hire{suffix}"),
            position: "Designer".to_string(),
            salary_rate: "850.00".to_string(),
            hire_date: "2024-06-01".to_string(),
            is_active: true,
        }
    }
}

/// Update employee request (partial)
#[derive(Debug, Serialize, Default)]
pub struct UpdateEmployeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_earnings: Option<String>,
}

/// Employee response
#[derive(Debug, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub salary_rate: String,
    pub hire_date: String,
    pub is_active: bool,
    pub available_earnings: String,
    pub employee_code: String,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub employee: EmployeeResponse,
    pub total_pending_amount: String,
}

/// Create payout request
#[derive(Debug, Serialize)]
pub struct CreatePayoutRequest {
    pub amount: String,
}

impl CreatePayoutRequest {
    pub fn of(amount: &str) -> Self {
        Self {
            amount: amount.to_string(),
        }
    }
}

/// Payout request response
#[derive(Debug, Deserialize)]
pub struct PayoutRequestResponse {
    pub id: String,
    pub employee_id: String,
    pub amount: String,
    pub status: String,
    pub requested_at: String,
    pub processed_at: Option<String>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
