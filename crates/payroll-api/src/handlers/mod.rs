//! Request handlers, one module per resource

pub mod auth;
pub mod employees;
pub mod health;
pub mod payouts;
pub mod profile;
