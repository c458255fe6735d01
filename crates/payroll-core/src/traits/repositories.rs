//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::entities::{Employee, PayoutRequest, User};
use crate::error::DomainError;
use crate::value_objects::{Role, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an employee is already linked to some user account
    async fn employee_linked(&self, employee_id: Snowflake) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Get the set of roles granted to a user
    async fn roles(&self, id: Snowflake) -> RepoResult<Vec<Role>>;

    /// Grant a role to a user (idempotent)
    async fn grant_role(&self, id: Snowflake, role: Role) -> RepoResult<()>;
}

// ============================================================================
// Employee Repository
// ============================================================================

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Employee>>;

    /// Find employee by registration code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Employee>>;

    /// List all employees, highest salary rate first
    async fn list(&self) -> RepoResult<Vec<Employee>>;

    /// Create a new employee
    async fn create(&self, employee: &Employee) -> RepoResult<()>;

    /// Update an existing employee (identity fields and ledger grant)
    async fn update(&self, employee: &Employee) -> RepoResult<()>;

    /// Hard delete an employee; payout requests cascade, the linked
    /// user account is detached
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Payout Request Repository
// ============================================================================

/// Sortable field for payout request listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayoutSortField {
    Amount,
    #[default]
    RequestedAt,
}

/// Sort direction for payout request listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort specification for payout request listings
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoutSort {
    pub field: PayoutSortField,
    pub direction: SortDirection,
}

#[async_trait]
pub trait PayoutRequestRepository: Send + Sync {
    /// Find payout request by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PayoutRequest>>;

    /// Create a new (Pending) payout request
    async fn create(&self, request: &PayoutRequest) -> RepoResult<()>;

    /// List all pending requests with the given ordering
    async fn list_pending(&self, sort: PayoutSort) -> RepoResult<Vec<PayoutRequest>>;

    /// List processed requests, optionally restricted to one employee
    async fn list_processed(
        &self,
        employee_id: Option<Snowflake>,
        sort: PayoutSort,
    ) -> RepoResult<Vec<PayoutRequest>>;

    /// Sum of pending amounts for one employee
    async fn pending_total(&self, employee_id: Snowflake) -> RepoResult<Decimal>;

    /// Atomically process a pending request: decrement the employee's
    /// ledger by `amount` and flip the status to Processed, or fail with
    /// `AlreadyProcessed` / `InsufficientEarnings` leaving no state change.
    async fn process(&self, id: Snowflake) -> RepoResult<PayoutRequest>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Store a refresh token digest for a user
    async fn store(
        &self,
        user_id: Snowflake,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Validate a token digest; returns the owning user when the token
    /// exists, is unrevoked, and unexpired
    async fn validate(&self, token_hash: &str) -> RepoResult<Option<Snowflake>>;

    /// Revoke a single token digest
    async fn revoke(&self, token_hash: &str) -> RepoResult<()>;

    /// Revoke every token belonging to a user
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<()>;
}
