//! Ledger errors

use thiserror::Error;

/// Errors that can occur in chain verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The chain is empty or its first entry is not the fixed genesis
    /// transaction. Only reachable through deserialized chains; construction
    /// always seeds genesis.
    #[error("Chain does not start at the genesis transaction")]
    GenesisMismatch,

    /// The entry at `index` does not hash-link to its predecessor. `expected`
    /// is the recomputed digest, `actual` the one stored on the entry.
    #[error("Broken hash chain at index {index}: expected {expected}, got {actual}")]
    HashMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
}
