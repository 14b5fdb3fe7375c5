pub mod debt;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payments;

// re-export key types
pub use debt::{Debt, DebtId, DebtKind};
pub use decimal::{Money, Rate};
pub use errors::{DebtError, Result};
pub use interest::{interest_portion, monthly_accrual};
pub use payments::{record_payment, split_payment, PaymentSplit};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
