//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in payroll-core.
//! Each repository handles database operations for a specific domain entity.

mod employee;
mod error;
mod payout_request;
mod refresh_token;
mod user;

pub use employee::PgEmployeeRepository;
pub use payout_request::PgPayoutRequestRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use user::PgUserRepository;
