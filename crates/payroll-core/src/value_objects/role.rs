//! Authorization roles
//!
//! A user is mapped to a set of roles; restricted operations gate on
//! membership. Stored as lowercase strings in the `user_roles` table.

use std::fmt;

/// Authorization role granted to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// May view employees and view/process payout requests
    Accountant,
}

impl Role {
    /// Database/string representation of the role
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accountant => "accountant",
        }
    }

    /// Parse a role from its string representation
    ///
    /// Returns `None` for unknown role names so stale rows in the
    /// membership table never grant anything.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "accountant" => Some(Self::Accountant),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
