//! Payout request entity and its two-state lifecycle
//!
//! A request moves Pending -> Processed exactly once; there is no other
//! transition. Processing decrements the owning employee's ledger by
//! `amount` in the same transaction (see the payout repository).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::value_objects::Snowflake;

/// Lifecycle state of a payout request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutStatus {
    /// Awaiting accountant action (initial state)
    Pending,
    /// Paid out; the ledger has been decremented (terminal state)
    Processed,
}

/// A single employee payout request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutRequest {
    pub id: Snowflake,
    pub employee_id: Snowflake,
    pub amount: Decimal,
    pub status: PayoutStatus,
    /// Set at creation, immutable afterwards
    pub requested_at: DateTime<Utc>,
    /// Set exactly once, when the request is processed
    pub processed_at: Option<DateTime<Utc>>,
}

impl PayoutRequest {
    /// Create a new Pending request; the ledger is untouched until processing
    pub fn new(id: Snowflake, employee_id: Snowflake, amount: Decimal) -> Self {
        Self {
            id,
            employee_id,
            amount,
            status: PayoutStatus::Pending,
            requested_at: Utc::now(),
            processed_at: None,
        }
    }

    /// Check if the request is still awaiting action
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == PayoutStatus::Pending
    }

    /// Check if the request has been paid out
    #[inline]
    pub fn is_processed(&self) -> bool {
        self.status == PayoutStatus::Processed
    }
}
