//! Account errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in account operations
///
/// Every rejected operation leaves the ledger untouched; nothing is
/// appended for an operation that returns one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Deposits and withdrawals require a strictly positive amount.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// The withdrawal would overdraw the account.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// The account is blocked; no operation may touch it.
    #[error("Account {name} is blocked")]
    AccountBlocked { name: String },
}
