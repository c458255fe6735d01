//! Employee entity - a payroll record with an earnings ledger
//!
//! `available_earnings` is the single scalar ledger balance: funds
//! accrued but not yet paid out. It must be >= 0 at rest and is only
//! mutated by payout processing (decrement) or administrative edit.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::value_objects::Snowflake;

/// Position name whose holders are granted the accountant role at registration
pub const ACCOUNTANT_POSITION: &str = "Accountant";

/// Employee entity with identity, pay rate, and the earnings ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Snowflake,
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

impl Employee {
    /// Create a new active Employee with a zero ledger and a fresh code
    pub fn new(
        id: Snowflake,
        first_name: String,
        last_name: String,
        position: String,
        salary_rate: Decimal,
        hire_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name,
            last_name,
            position,
            salary_rate,
            hire_date,
            is_active: true,
            available_earnings: Decimal::ZERO,
            employee_code: generate_employee_code(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name: "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this position is granted the accountant role at registration
    #[inline]
    pub fn holds_accountant_position(&self) -> bool {
        self.position == ACCOUNTANT_POSITION
    }

    /// Whether the ledger can cover a payout of `amount`
    #[inline]
    pub fn can_cover(&self, amount: Decimal) -> bool {
        amount <= self.available_earnings
    }
}

/// Generate a unique 10-character employee code
///
/// Employees hand this code to HR-issued registration; uniqueness is
/// enforced by the database constraint on `employee_code`.
pub fn generate_employee_code() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const CODE_LEN: usize = 10;

    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_employee() -> Employee {
        Employee::new(
            Snowflake::new(1),
            "Jane".to_string(),
            "Smith".to_string(),
            "Designer".to_string(),
            dec!(750.00),
            NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_new_employee_defaults() {
        let employee = sample_employee();
        assert!(employee.is_active);
        assert_eq!(employee.available_earnings, Decimal::ZERO);
        assert_eq!(employee.employee_code.len(), 10);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_employee().full_name(), "Jane Smith");
    }

    #[test]
    fn test_accountant_position_is_exact_match() {
        let mut employee = sample_employee();
        assert!(!employee.holds_accountant_position());

        employee.position = ACCOUNTANT_POSITION.to_string();
        assert!(employee.holds_accountant_position());

        employee.position = "accountant".to_string();
        assert!(!employee.holds_accountant_position());
    }

    #[test]
    fn test_can_cover() {
        let mut employee = sample_employee();
        employee.available_earnings = dec!(100.00);

        assert!(employee.can_cover(dec!(100.00)));
        assert!(employee.can_cover(dec!(40.00)));
        assert!(!employee.can_cover(dec!(100.01)));
    }

    #[test]
    fn test_generate_employee_code() {
        let code1 = generate_employee_code();
        let code2 = generate_employee_code();

        assert_eq!(code1.len(), 10);
        assert_eq!(code2.len(), 10);
        assert!(code1.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
