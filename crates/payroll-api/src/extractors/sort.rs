//! Sort extractor
//!
//! Extracts `sort_by` / `order` query parameters for payout listings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use payroll_core::traits::{PayoutSort, PayoutSortField, SortDirection};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw sort query parameters
#[derive(Debug, Deserialize)]
pub struct SortParams {
    /// Field to sort by: "amount" or "requested_at"
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Sort order: "asc" or "desc"
    #[serde(default)]
    pub order: Option<String>,
}

/// Validated sort specification (defaults to requested_at ascending)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sort(pub PayoutSort);

impl TryFrom<SortParams> for Sort {
    type Error = ApiError;

    fn try_from(params: SortParams) -> Result<Self, Self::Error> {
        let field = match params.sort_by.as_deref() {
            None | Some("requested_at") => PayoutSortField::RequestedAt,
            Some("amount") => PayoutSortField::Amount,
            Some(other) => {
                return Err(ApiError::invalid_query(format!(
                    "Unknown sort field: {other}"
                )))
            }
        };

        let direction = match params.order.as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(ApiError::invalid_query(format!(
                    "Unknown sort order: {other}"
                )))
            }
        };

        Ok(Sort(PayoutSort { field, direction }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Sort
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<SortParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Sort::try_from(params)
    }
}
