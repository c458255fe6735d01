//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path IDs, and sorting.

mod auth;
mod path;
mod sort;
mod validated;

pub use auth::AuthUser;
pub use path::{EmployeeIdPath, RequestIdPath};
pub use sort::{Sort, SortParams};
pub use validated::ValidatedJson;
