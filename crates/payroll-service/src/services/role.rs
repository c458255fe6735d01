//! Role service
//!
//! Maps users to their role set and gates restricted operations on
//! membership. Handlers never duplicate this check; services call
//! `require_accountant` before touching restricted data.

use payroll_core::value_objects::{Role, Snowflake};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Role service for access control
pub struct RoleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoleService<'a> {
    /// Create a new RoleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check whether a user holds a given role
    #[instrument(skip(self))]
    pub async fn has_role(&self, user_id: Snowflake, role: Role) -> ServiceResult<bool> {
        let roles = self.ctx.user_repo().roles(user_id).await?;
        Ok(roles.contains(&role))
    }

    /// Check whether a user is an accountant
    #[instrument(skip(self))]
    pub async fn is_accountant(&self, user_id: Snowflake) -> ServiceResult<bool> {
        self.has_role(user_id, Role::Accountant).await
    }

    /// Require the accountant role, erroring if the user lacks it
    #[instrument(skip(self))]
    pub async fn require_accountant(&self, user_id: Snowflake) -> ServiceResult<()> {
        if !self.is_accountant(user_id).await? {
            return Err(ServiceError::permission_denied(Role::Accountant.as_str()));
        }
        Ok(())
    }

    /// Grant a role to a user (idempotent)
    #[instrument(skip(self))]
    pub async fn grant(&self, user_id: Snowflake, role: Role) -> ServiceResult<()> {
        self.ctx.user_repo().grant_role(user_id, role).await?;
        Ok(())
    }
}
