//! # payroll-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthResponse, CreateEmployeeRequest, CreatePayoutRequest, CurrentUserResponse,
    EmployeeResponse, HealthResponse, LoginRequest, LogoutRequest, PayoutRequestResponse,
    ProfileResponse, ReadinessResponse, RefreshTokenRequest, RegisterRequest,
    UpdateEmployeeRequest,
};
pub use services::{
    AuthService, EmployeeService, PayoutService, RoleService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
