use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{DebtError, Result};

/// unique identifier for a debt record
pub type DebtId = Uuid;

/// debt record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtKind {
    CreditCard,
    PersonalLoan,
    AutoLoan,
    StudentLoan,
    Mortgage,
    Other,
}

/// a persisted debt record, as synced by the budgeting app.
///
/// `interest_rate` is a nominal annual percentage (18.99 means 18.99%) and
/// `current_balance` is the outstanding principal; both are optional because
/// synced records may omit them. field names follow the app's camelCase
/// JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    pub kind: DebtKind,
    #[serde(default)]
    pub interest_rate: Option<Decimal>,
    #[serde(default)]
    pub current_balance: Option<Money>,
    #[serde(default)]
    pub minimum_payment: Option<Money>,
    pub opened_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Debt {
    pub fn new(name: impl Into<String>, kind: DebtKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            interest_rate: None,
            current_balance: None,
            minimum_payment: None,
            opened_at: now,
            updated_at: now,
        }
    }

    /// set the annual percentage rate
    pub fn with_rate(mut self, annual_percentage: Decimal) -> Self {
        self.interest_rate = Some(annual_percentage);
        self
    }

    /// set the outstanding balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.current_balance = Some(balance);
        self
    }

    /// set the minimum payment
    pub fn with_minimum_payment(mut self, minimum: Money) -> Self {
        self.minimum_payment = Some(minimum);
        self
    }

    /// check the record for values the calculator would silently absorb.
    ///
    /// the interest calculation itself never fails; callers that want to
    /// distinguish a malformed record from a zero-interest one run this
    /// before computing.
    pub fn validate(&self) -> Result<()> {
        if let Some(rate) = self.interest_rate {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(DebtError::InvalidInterestRate { rate });
            }
        }
        if let Some(balance) = self.current_balance {
            if balance.is_negative() {
                return Err(DebtError::NegativeBalance { balance });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_app_record_deserialization() {
        // record as exported by the app, with camelCase fields
        let json = r#"{
            "id": "0d2cdfc4-6b11-45dc-8d66-ba4a3aed9e23",
            "name": "Visa",
            "kind": "creditCard",
            "interestRate": 18.99,
            "currentBalance": 1200,
            "openedAt": "2024-03-01T00:00:00Z",
            "updatedAt": "2024-06-15T12:30:00Z"
        }"#;

        let debt: Debt = serde_json::from_str(json).unwrap();
        assert_eq!(debt.kind, DebtKind::CreditCard);
        assert_eq!(debt.interest_rate, Some(dec!(18.99)));
        assert_eq!(debt.current_balance, Some(Money::from_major(1200)));
        assert_eq!(debt.minimum_payment, None);
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let json = r#"{
            "id": "0d2cdfc4-6b11-45dc-8d66-ba4a3aed9e23",
            "name": "IOU",
            "kind": "other",
            "openedAt": "2024-03-01T00:00:00Z",
            "updatedAt": "2024-03-01T00:00:00Z"
        }"#;

        let debt: Debt = serde_json::from_str(json).unwrap();
        assert_eq!(debt.interest_rate, None);
        assert_eq!(debt.current_balance, None);
    }

    #[test]
    fn test_validate() {
        let debt = Debt::new("Visa", DebtKind::CreditCard)
            .with_rate(dec!(18.99))
            .with_balance(Money::from_major(1200));
        assert!(debt.validate().is_ok());

        let no_terms = Debt::new("IOU", DebtKind::Other);
        assert!(no_terms.validate().is_ok());

        let bad_rate = Debt::new("Visa", DebtKind::CreditCard).with_rate(dec!(-1));
        assert!(matches!(
            bad_rate.validate(),
            Err(DebtError::InvalidInterestRate { .. })
        ));

        let bad_balance =
            Debt::new("Visa", DebtKind::CreditCard).with_balance(Money::from_major(-100));
        assert!(matches!(
            bad_balance.validate(),
            Err(DebtError::NegativeBalance { .. })
        ));
    }
}
