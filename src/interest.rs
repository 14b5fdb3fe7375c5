use crate::debt::Debt;
use crate::decimal::{Money, Rate};

/// one month of simple interest on the debt's outstanding balance.
///
/// the stored annual percentage is converted to a simple monthly rate
/// (annual / 12, non-compounding) and applied to the current balance. a
/// missing or zero rate, or a missing or zero balance, yields zero.
pub fn monthly_accrual(debt: &Debt) -> Money {
    let rate = match debt.interest_rate {
        Some(r) if !r.is_zero() => Rate::from_percentage(r),
        _ => return Money::ZERO,
    };
    let balance = match debt.current_balance {
        Some(b) if !b.is_zero() => b,
        _ => return Money::ZERO,
    };

    balance * rate.monthly_rate().as_decimal()
}

/// the portion of a payment attributed to accrued interest.
///
/// this is the monthly accrual capped at the payment amount: the interest
/// portion never exceeds what was actually paid. degenerate records (no
/// rate, no balance) yield zero rather than an error; callers wanting to
/// reject such records run [`Debt::validate`] first.
pub fn interest_portion(debt: &Debt, payment: Money) -> Money {
    monthly_accrual(debt).min(payment)
}
