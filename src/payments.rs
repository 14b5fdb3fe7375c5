use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::decimal::Money;
use crate::errors::{DebtError, Result};
use crate::interest::interest_portion;

/// how a debt payment was applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PaymentSplit {
    pub interest: Money,
    pub principal: Money,
    pub excess: Money,
}

impl PaymentSplit {
    pub fn total_applied(&self) -> Money {
        self.interest + self.principal
    }
}

/// split a payment into interest and principal portions.
///
/// interest is satisfied first, capped per [`interest_portion`]; the
/// remainder reduces principal up to the outstanding balance; anything
/// beyond that is reported as excess.
pub fn split_payment(debt: &Debt, amount: Money) -> PaymentSplit {
    let interest = interest_portion(debt, amount);
    let mut remaining = amount - interest;

    let balance = debt.current_balance.unwrap_or(Money::ZERO);
    let principal = remaining.min(balance).max(Money::ZERO);
    remaining -= principal;

    PaymentSplit {
        interest,
        principal,
        excess: remaining,
    }
}

/// validating entry point for the payment recording flow.
///
/// rejects non-positive amounts and malformed debt records before
/// computing the split.
pub fn record_payment(debt: &Debt, amount: Money) -> Result<PaymentSplit> {
    if !amount.is_positive() {
        return Err(DebtError::InvalidPaymentAmount { amount });
    }
    debt.validate()?;

    Ok(split_payment(debt, amount))
}
