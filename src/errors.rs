use thiserror::Error;

use crate::decimal::Money;
use rust_decimal::Decimal;

#[derive(Error, Debug)]
pub enum DebtError {
    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount { amount: Money },

    #[error("invalid interest rate: {rate}% (annual percentage must be non-negative)")]
    InvalidInterestRate { rate: Decimal },

    #[error("negative balance: {balance}")]
    NegativeBalance { balance: Money },
}

pub type Result<T> = std::result::Result<T, DebtError>;
