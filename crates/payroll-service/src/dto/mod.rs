//! Data transfer objects - request and response types for the API

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateEmployeeRequest, CreatePayoutRequest, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest, UpdateEmployeeRequest,
};
pub use responses::{
    AuthResponse, CurrentUserResponse, EmployeeResponse, HealthResponse, PayoutRequestResponse,
    ProfileResponse, ReadinessResponse,
};
