//! Employee database model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for employees table
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub salary_rate: Decimal,
    pub hire_date: NaiveDate,
    pub is_active: bool,
    pub available_earnings: Decimal,
    pub employee_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
