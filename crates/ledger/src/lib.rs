//! Chainbank ledger - hash-chained, append-only transaction log
//!
//! One process-wide chain records every signed amount movement. Each entry
//! carries a SHA-256 digest over its canonical string, which includes the
//! digest of the entry before it, so any in-place edit breaks the link to
//! its successor and is caught by verification. Balances are never stored;
//! they are replayed from the chain on demand.

pub mod chain;
pub mod error;
pub mod shared;
pub mod transaction;

pub use chain::Ledger;
pub use error::ChainError;
pub use shared::SharedLedger;
pub use transaction::{
    sha256_hex, validate_transaction, Transaction, GENESIS_OWNER, GENESIS_SEED,
};
