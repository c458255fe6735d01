//! Entity <-> model mappers

mod employee;
mod payout_request;
mod user;

pub use payout_request::{parse_status, status_to_str};
