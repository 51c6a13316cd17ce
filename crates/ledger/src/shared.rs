//! SharedLedger - thread-safe handle over a single ledger

use crate::chain::Ledger;
use crate::error::ChainError;
use crate::transaction::Transaction;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

/// A cloneable handle to one ledger shared by many accounts.
///
/// Every clone refers to the same underlying chain. Each operation takes the
/// lock for its full duration, so appends serialize (one writer at a time)
/// and reads observe a consistent chain state, never a half-written entry.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Create a handle to a fresh, genesis-seeded ledger.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Ledger::new())),
        }
    }

    /// Append a signed movement for `owner`. See [`Ledger::append`].
    pub fn append(&self, owner: impl Into<String>, amount: Decimal) -> Transaction {
        self.inner.lock().unwrap().append(owner, amount)
    }

    /// Net balance for `owner` over the whole chain, under one lock hold.
    pub fn balance_of(&self, owner: &str) -> Decimal {
        self.inner.lock().unwrap().balance_of(owner)
    }

    /// Clones of every entry belonging to `owner`, in chain order.
    pub fn transactions_of(&self, owner: &str) -> Vec<Transaction> {
        self.inner
            .lock()
            .unwrap()
            .account_transactions(owner)
            .cloned()
            .collect()
    }

    /// Verify the whole chain. See [`Ledger::verify`].
    pub fn verify(&self) -> Result<(), ChainError> {
        self.inner.lock().unwrap().verify()
    }

    /// Number of entries, genesis included.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// A point-in-time copy of the whole ledger, for dumping or serializing.
    pub fn snapshot(&self) -> Ledger {
        self.inner.lock().unwrap().clone()
    }
}
