//! Chainbank accounts - named participants on the shared ledger
//!
//! Accounts enforce the operation rules the ledger itself stays agnostic
//! of: amounts must be positive, withdrawals must be covered, blocked
//! accounts reject every operation. Balances are always replayed from the
//! chain, so two accounts sharing one ledger can never disagree on state.

pub mod account;
pub mod error;

pub use account::{Account, AccountStatus};
pub use error::AccountError;
