//! Ledger - append-only transaction chain with integrity verification

use crate::error::ChainError;
use crate::transaction::{chained_hash, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An append-only chain of [`Transaction`]s shared by every account.
///
/// A fresh ledger holds exactly the genesis entry. Appends always extend the
/// tail; nothing is ever removed or rewritten, so balances are derived by
/// replaying the chain rather than stored. The ledger applies no business
/// rules of its own: amount signs and preconditions are the caller's job.
///
/// A deserialized ledger is untrusted until [`verify`](Ledger::verify)
/// accepts it. Verification requires the chain to begin at the fixed genesis
/// entry, so a fabricated anchor or an empty chain never passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    chain: Vec<Transaction>,
}

impl Ledger {
    /// Create a ledger seeded with the genesis transaction.
    pub fn new() -> Self {
        Self {
            chain: vec![Transaction::genesis()],
        }
    }

    /// Append a signed movement for `owner`, chained to the current tail.
    ///
    /// The entry is timestamped with the current wall clock (whole seconds)
    /// and hash-linked to the latest transaction. Returns the sealed entry.
    pub fn append(&mut self, owner: impl Into<String>, amount: Decimal) -> Transaction {
        let timestamp = chrono::Utc::now().timestamp();
        let tx = Transaction::new(owner, amount, timestamp, self.latest().hash());
        tracing::debug!(
            owner = %tx.owner(),
            amount = %tx.amount(),
            hash = %tx.hash(),
            "transaction appended"
        );
        self.chain.push(tx.clone());
        tx
    }

    /// The newest entry in the chain (genesis if nothing was appended).
    pub fn latest(&self) -> &Transaction {
        // Never empty for a constructed or verified chain.
        &self.chain[self.chain.len() - 1]
    }

    /// All entries in append order, genesis first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.chain
    }

    /// Entries belonging to `owner`, lazily filtered in chain order.
    ///
    /// Recomputed from the live chain on every call; nothing is cached.
    pub fn account_transactions<'a>(
        &'a self,
        owner: &'a str,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.chain.iter().filter(move |tx| tx.owner() == owner)
    }

    /// Number of entries, genesis included.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Net balance for `owner`: the sum of all its signed amounts.
    ///
    /// An owner with no transactions nets to zero, so unknown names are
    /// indistinguishable from untouched accounts. Summation saturates at the
    /// decimal range bounds instead of panicking.
    pub fn balance_of(&self, owner: &str) -> Decimal {
        self.account_transactions(owner)
            .map(Transaction::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Walk the chain and check the genesis anchor plus every adjacent pair.
    ///
    /// The first entry must be the fixed genesis transaction; an empty chain
    /// or one rebased on a different anchor fails with
    /// [`ChainError::GenesisMismatch`]. For each entry after genesis,
    /// recomputes the digest it would carry if it legitimately extended its
    /// predecessor and compares against the stored hash. The first mismatch
    /// aborts the walk; its index, the recomputed digest and the stored
    /// digest are reported in the error.
    pub fn verify(&self) -> Result<(), ChainError> {
        if self.chain.first() != Some(&Transaction::genesis()) {
            tracing::warn!("chain verification failed: genesis mismatch");
            return Err(ChainError::GenesisMismatch);
        }
        for index in 1..self.chain.len() {
            let prev = &self.chain[index - 1];
            let tx = &self.chain[index];
            let expected = chained_hash(prev, tx);
            if expected != tx.hash() {
                tracing::warn!(index, "chain verification failed");
                return Err(ChainError::HashMismatch {
                    index,
                    expected,
                    actual: tx.hash().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Ledger {
    /// One canonical line per entry, append order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tx) in self.chain.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", tx)?;
        }
        Ok(())
    }
}
