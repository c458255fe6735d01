//! Domain errors - error types for the domain layer

use rust_decimal::Decimal;
use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(Snowflake),

    #[error("Payout request not found: {0}")]
    PayoutRequestNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid employee code")]
    InvalidEmployeeCode,

    #[error("Payout amount must be greater than zero")]
    AmountNotPositive,

    #[error("Available earnings cannot be negative")]
    NegativeEarnings,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameTaken,

    #[error("This employee is already registered with another user")]
    EmployeeAlreadyLinked,

    // =========================================================================
    // State Errors (payout lifecycle)
    // =========================================================================
    #[error("This payout request has already been processed")]
    AlreadyProcessed(Snowflake),

    #[error("Insufficient funds for this payout request: {requested} requested, {available} available")]
    InsufficientEarnings {
        requested: Decimal,
        available: Decimal,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EmployeeNotFound(_) => "UNKNOWN_EMPLOYEE",
            Self::PayoutRequestNotFound(_) => "UNKNOWN_PAYOUT_REQUEST",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmployeeCode => "INVALID_EMPLOYEE_CODE",
            Self::AmountNotPositive => "AMOUNT_NOT_POSITIVE",
            Self::NegativeEarnings => "NEGATIVE_EARNINGS",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmployeeAlreadyLinked => "EMPLOYEE_ALREADY_LINKED",

            // State
            Self::AlreadyProcessed(_) => "ALREADY_PROCESSED",
            Self::InsufficientEarnings { .. } => "INSUFFICIENT_EARNINGS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::EmployeeNotFound(_) | Self::PayoutRequestNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmployeeCode
                | Self::AmountNotPositive
                | Self::NegativeEarnings
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken | Self::EmployeeAlreadyLinked)
    }

    /// Check if this is a lifecycle state error (no state change occurred)
    pub fn is_state(&self) -> bool {
        matches!(
            self,
            Self::AlreadyProcessed(_) | Self::InsufficientEarnings { .. }
        )
    }
}
