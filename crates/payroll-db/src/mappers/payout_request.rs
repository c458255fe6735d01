//! Payout request entity <-> model mapper

use payroll_core::entities::{PayoutRequest, PayoutStatus};
use payroll_core::Snowflake;

use crate::models::PayoutRequestModel;

/// Convert database status string to PayoutStatus
///
/// The schema constrains the column to the two known values; anything
/// else (manual edits) is treated as still pending.
pub fn parse_status(status: &str) -> PayoutStatus {
    match status {
        "processed" => PayoutStatus::Processed,
        _ => PayoutStatus::Pending,
    }
}

/// Convert PayoutStatus to database string
pub fn status_to_str(status: PayoutStatus) -> &'static str {
    match status {
        PayoutStatus::Pending => "pending",
        PayoutStatus::Processed => "processed",
    }
}

/// Convert PayoutRequestModel to PayoutRequest entity
impl From<PayoutRequestModel> for PayoutRequest {
    fn from(model: PayoutRequestModel) -> Self {
        PayoutRequest {
            id: Snowflake::new(model.id),
            employee_id: Snowflake::new(model.employee_id),
            amount: model.amount,
            status: parse_status(&model.status),
            requested_at: model.requested_at,
            processed_at: model.processed_at,
        }
    }
}
