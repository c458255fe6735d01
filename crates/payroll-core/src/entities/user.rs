//! User entity - an authentication identity, optionally linked to an employee

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Account used for authentication, linked 1:1 to an Employee once registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    /// The linked employee record, if any. An accountant reviewing payouts
    /// still needs one to request payouts of their own.
    pub employee_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, username: String, employee_id: Option<Snowflake>) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            employee_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this account is linked to an employee record
    #[inline]
    pub fn has_employee(&self) -> bool {
        self.employee_id.is_some()
    }
}
