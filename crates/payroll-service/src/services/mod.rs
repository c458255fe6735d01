//! Application services - business logic over the repository ports

mod auth;
mod context;
mod employee;
mod error;
mod payout;
mod role;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use employee::EmployeeService;
pub use error::{ServiceError, ServiceResult};
pub use payout::PayoutService;
pub use role::RoleService;
