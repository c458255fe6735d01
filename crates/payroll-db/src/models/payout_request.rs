//! Payout request database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for payout_requests table
#[derive(Debug, Clone, FromRow)]
pub struct PayoutRequestModel {
    pub id: i64,
    pub employee_id: i64,
    pub amount: Decimal,
    pub status: String,
    pub requested_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}
