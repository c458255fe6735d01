//! Domain entities - core business objects

mod employee;
mod payout_request;
mod user;

pub use employee::{generate_employee_code, Employee, ACCOUNTANT_POSITION};
pub use payout_request::{PayoutRequest, PayoutStatus};
pub use user::User;
