//! Payout service
//!
//! The payout lifecycle: employees create Pending requests against
//! their ledger; accountants list, inspect, and process them. The
//! balance cap is enforced here at creation time regardless of any
//! client-side validation, and again inside the processing transaction.

use payroll_core::entities::PayoutRequest;
use payroll_core::traits::PayoutSort;
use payroll_core::{DomainError, Snowflake};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::dto::{CreatePayoutRequest, PayoutRequestResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::role::RoleService;

/// Payout service
pub struct PayoutService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PayoutService<'a> {
    /// Create a new PayoutService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new payout request for the authenticated user's employee record
    ///
    /// Rejected (and nothing persisted) when the amount is not positive
    /// or exceeds the current available earnings.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreatePayoutRequest,
    ) -> ServiceResult<PayoutRequestResponse> {
        let employee_id = self.linked_employee(user_id).await?;

        let employee = self
            .ctx
            .employee_repo()
            .find_by_id(employee_id)
            .await?
            .ok_or(DomainError::EmployeeNotFound(employee_id))?;

        if request.amount <= Decimal::ZERO {
            return Err(DomainError::AmountNotPositive.into());
        }
        if !employee.can_cover(request.amount) {
            return Err(ServiceError::validation(format!(
                "Requested amount exceeds available earnings ({})",
                employee.available_earnings
            )));
        }

        let payout = PayoutRequest::new(self.ctx.generate_id(), employee_id, request.amount);
        self.ctx.payout_repo().create(&payout).await?;

        info!(request_id = %payout.id, employee_id = %employee_id, amount = %payout.amount, "Payout request created");

        Ok(PayoutRequestResponse::from(&payout))
    }

    /// List pending payout requests (accountant-only)
    #[instrument(skip(self))]
    pub async fn list_pending(
        &self,
        acting_user: Snowflake,
        sort: PayoutSort,
    ) -> ServiceResult<Vec<PayoutRequestResponse>> {
        RoleService::new(self.ctx)
            .require_accountant(acting_user)
            .await?;

        let requests = self.ctx.payout_repo().list_pending(sort).await?;
        Ok(requests.iter().map(PayoutRequestResponse::from).collect())
    }

    /// Get one payout request (accountant-only)
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        acting_user: Snowflake,
        request_id: Snowflake,
    ) -> ServiceResult<PayoutRequestResponse> {
        RoleService::new(self.ctx)
            .require_accountant(acting_user)
            .await?;

        let request = self
            .ctx
            .payout_repo()
            .find_by_id(request_id)
            .await?
            .ok_or(DomainError::PayoutRequestNotFound(request_id))?;

        Ok(PayoutRequestResponse::from(&request))
    }

    /// Process a pending payout request (accountant-only)
    ///
    /// Atomic in the repository: the ledger decrement and the status
    /// flip commit together or not at all. Fails without state change
    /// when the request was already processed or the balance no longer
    /// covers the amount.
    #[instrument(skip(self))]
    pub async fn process(
        &self,
        acting_user: Snowflake,
        request_id: Snowflake,
    ) -> ServiceResult<PayoutRequestResponse> {
        RoleService::new(self.ctx)
            .require_accountant(acting_user)
            .await?;

        let processed = self.ctx.payout_repo().process(request_id).await?;

        Ok(PayoutRequestResponse::from(&processed))
    }

    /// Payout history: accountants see all processed requests, an
    /// employee sees only their own
    #[instrument(skip(self))]
    pub async fn history(
        &self,
        user_id: Snowflake,
        sort: PayoutSort,
    ) -> ServiceResult<Vec<PayoutRequestResponse>> {
        let scope = if RoleService::new(self.ctx).is_accountant(user_id).await? {
            None
        } else {
            Some(self.linked_employee(user_id).await?)
        };

        let requests = self.ctx.payout_repo().list_processed(scope, sort).await?;
        Ok(requests.iter().map(PayoutRequestResponse::from).collect())
    }

    /// Resolve the employee record linked to a user account
    async fn linked_employee(&self, user_id: Snowflake) -> ServiceResult<Snowflake> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        user.employee_id
            .ok_or_else(|| ServiceError::not_found("Employee", "linked to current user"))
    }
}
