//! PostgreSQL implementation of PayoutRequestRepository
//!
//! `process` is the one operation in the system with real invariants:
//! the balance check and the Pending -> Processed flip must be atomic,
//! and a request must never decrement the ledger twice.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{info, instrument};

use payroll_core::entities::{PayoutRequest, PayoutStatus};
use payroll_core::error::DomainError;
use payroll_core::traits::{
    PayoutRequestRepository, PayoutSort, PayoutSortField, RepoResult, SortDirection,
};
use payroll_core::value_objects::Snowflake;

use crate::mappers::status_to_str;
use crate::models::PayoutRequestModel;

use super::error::{employee_not_found, map_db_error, payout_request_not_found};

/// ORDER BY clause for a sort specification (fixed vocabulary, never user input)
fn order_clause(sort: PayoutSort) -> &'static str {
    match (sort.field, sort.direction) {
        (PayoutSortField::Amount, SortDirection::Asc) => "amount ASC",
        (PayoutSortField::Amount, SortDirection::Desc) => "amount DESC",
        (PayoutSortField::RequestedAt, SortDirection::Asc) => "requested_at ASC",
        (PayoutSortField::RequestedAt, SortDirection::Desc) => "requested_at DESC",
    }
}

/// PostgreSQL implementation of PayoutRequestRepository
#[derive(Clone)]
pub struct PgPayoutRequestRepository {
    pool: PgPool,
}

impl PgPayoutRequestRepository {
    /// Create a new PgPayoutRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayoutRequestRepository for PgPayoutRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PayoutRequest>> {
        let result = sqlx::query_as::<_, PayoutRequestModel>(
            r"
            SELECT id, employee_id, amount, status, requested_at, processed_at
            FROM payout_requests
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PayoutRequest::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, request: &PayoutRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO payout_requests (id, employee_id, amount, status, requested_at, processed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(request.id.into_inner())
        .bind(request.employee_id.into_inner())
        .bind(request.amount)
        .bind(status_to_str(request.status))
        .bind(request.requested_at)
        .bind(request.processed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_pending(&self, sort: PayoutSort) -> RepoResult<Vec<PayoutRequest>> {
        let sql = format!(
            r"
            SELECT id, employee_id, amount, status, requested_at, processed_at
            FROM payout_requests
            WHERE status = 'pending'
            ORDER BY {}
            ",
            order_clause(sort)
        );

        let results = sqlx::query_as::<_, PayoutRequestModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PayoutRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_processed(
        &self,
        employee_id: Option<Snowflake>,
        sort: PayoutSort,
    ) -> RepoResult<Vec<PayoutRequest>> {
        let sql = format!(
            r"
            SELECT id, employee_id, amount, status, requested_at, processed_at
            FROM payout_requests
            WHERE status = 'processed' AND ($1::BIGINT IS NULL OR employee_id = $1)
            ORDER BY {}
            ",
            order_clause(sort)
        );

        let results = sqlx::query_as::<_, PayoutRequestModel>(&sql)
            .bind(employee_id.map(Snowflake::into_inner))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PayoutRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn pending_total(&self, employee_id: Snowflake) -> RepoResult<Decimal> {
        let total = sqlx::query_scalar::<_, Decimal>(
            r"
            SELECT COALESCE(SUM(amount), 0)
            FROM payout_requests
            WHERE employee_id = $1 AND status = 'pending'
            ",
        )
        .bind(employee_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn process(&self, id: Snowflake) -> RepoResult<PayoutRequest> {
        // Everything below runs under one transaction; an early return
        // drops the transaction and rolls back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the request row so a concurrent process() call serializes here
        let request = sqlx::query_as::<_, PayoutRequestModel>(
            r"
            SELECT id, employee_id, amount, status, requested_at, processed_at
            FROM payout_requests
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| payout_request_not_found(id))?;

        if request.status == status_to_str(PayoutStatus::Processed) {
            return Err(DomainError::AlreadyProcessed(id));
        }

        let available = sqlx::query_scalar::<_, Decimal>(
            r"
            SELECT available_earnings FROM employees WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(request.employee_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| employee_not_found(Snowflake::new(request.employee_id)))?;

        if request.amount > available {
            return Err(DomainError::InsufficientEarnings {
                requested: request.amount,
                available,
            });
        }

        // The WHERE re-checks the balance so the ledger can never go negative
        let debited = sqlx::query(
            r"
            UPDATE employees
            SET available_earnings = available_earnings - $2, updated_at = NOW()
            WHERE id = $1 AND available_earnings >= $2
            ",
        )
        .bind(request.employee_id)
        .bind(request.amount)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if debited.rows_affected() == 0 {
            return Err(DomainError::InsufficientEarnings {
                requested: request.amount,
                available,
            });
        }

        // Status flip is guarded on the current status as well
        let processed = sqlx::query_as::<_, PayoutRequestModel>(
            r"
            UPDATE payout_requests
            SET status = 'processed', processed_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING id, employee_id, amount, status, requested_at, processed_at
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::AlreadyProcessed(id))?;

        tx.commit().await.map_err(map_db_error)?;

        info!(
            request_id = %id,
            employee_id = request.employee_id,
            amount = %request.amount,
            "Payout request processed"
        );

        Ok(PayoutRequest::from(processed))
    }
}
