//! Transaction - immutable, hash-sealed ledger entries

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Seed literal whose digest anchors the genesis transaction.
pub const GENESIS_SEED: &str = "troi";

/// Sentinel owner of the genesis transaction.
pub const GENESIS_OWNER: &str = "penelope";

/// SHA-256 of a UTF-8 string, rendered as lowercase hex (64 chars).
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// An immutable record of one signed amount movement.
///
/// The hash is computed from the remaining four fields when the record is
/// built and doubles as the chain anchor for the next entry. Fields stay
/// private so a constructed transaction can never be edited in place; a
/// deserialized one is untrusted until the chain holding it passes
/// [`Ledger::verify`](crate::Ledger::verify), which checks the genesis
/// anchor and every hash link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    owner: String,
    amount: Decimal,
    timestamp: i64,
    previous_hash: String,
    hash: String,
}

impl Transaction {
    /// Assemble the fields, compute the content hash, freeze the record.
    pub fn new(
        owner: impl Into<String>,
        amount: Decimal,
        timestamp: i64,
        previous_hash: impl Into<String>,
    ) -> Self {
        let owner = owner.into();
        let previous_hash = previous_hash.into();
        let hash = sha256_hex(&canonical(timestamp, &owner, amount, &previous_hash));
        Self {
            owner,
            amount,
            timestamp,
            previous_hash,
            hash,
        }
    }

    /// The fixed first entry of every ledger.
    ///
    /// `owner = "penelope"`, `amount = 0`, `timestamp = 0`,
    /// `previous_hash = sha256("troi")`. The constants are process-wide, so
    /// every chain starts from the same anchor and produces identical
    /// digests for identical histories.
    pub fn genesis() -> Self {
        Self::new(GENESIS_OWNER, Decimal::ZERO, 0, sha256_hex(GENESIS_SEED))
    }

    /// Identifier of the account this movement belongs to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Signed amount; withdrawals are negative deposits.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whole seconds since the epoch (0 for genesis).
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Hex digest of the preceding entry in the chain.
    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    /// This entry's identity: SHA-256 over its canonical string.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical(
            self.timestamp,
            &self.owner,
            self.amount,
            &self.previous_hash,
        ))
    }
}

/// Canonical hash input: `{timestamp}:{owner}:{amount}:{previous_hash}`.
///
/// Field order, the `:` separator and the exact decimal rendering of
/// `amount` (scale preserved, no scientific notation) are the compatibility
/// surface; any drift changes every digest downstream.
fn canonical(timestamp: i64, owner: &str, amount: Decimal, previous_hash: &str) -> String {
    format!("{}:{}:{}:{}", timestamp, owner, amount, previous_hash)
}

/// Digest `tx` would carry if `prev` were its legitimate predecessor.
pub(crate) fn chained_hash(prev: &Transaction, tx: &Transaction) -> String {
    sha256_hex(&canonical(tx.timestamp, &tx.owner, tx.amount, &prev.hash))
}

/// Check that `tx` correctly extends `prev`.
///
/// Recomputes the digest a hypothetical transaction would have with `tx`'s
/// own owner/amount/timestamp but `prev`'s actual hash as the chain input,
/// and reports whether it matches the stored hash.
pub fn validate_transaction(prev: &Transaction, tx: &Transaction) -> bool {
    chained_hash(prev, tx) == tx.hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SEED_DIGEST: &str = "768021b7ac85f0fb8fabbde8a30e2e36f1b8512e756d277e0e5aaa5555d02949";
    const GENESIS_HASH: &str = "8a048cd5df5f0b480fd116096062ec22d35cca2ff02a9dad35d1259bda7156ba";

    #[test]
    fn test_seed_digest() {
        assert_eq!(sha256_hex(GENESIS_SEED), SEED_DIGEST);
    }

    #[test]
    fn test_genesis_constants() {
        let genesis = Transaction::genesis();
        assert_eq!(genesis.owner(), "penelope");
        assert_eq!(genesis.amount(), Decimal::ZERO);
        assert_eq!(genesis.timestamp(), 0);
        assert_eq!(genesis.previous_hash(), SEED_DIGEST);
        assert_eq!(genesis.hash(), GENESIS_HASH);
    }

    #[test]
    fn test_transaction_known_vector() {
        // Reference digest for ("aaa", 10, ts 0) chained to genesis.
        let tx = Transaction::new("aaa", dec!(10), 0, Transaction::genesis().hash());
        assert_eq!(
            tx.hash(),
            "66439fff94e17c67331c96c75fbf774b3d9f0400ebefbf1db5f7141adccd4767"
        );
    }

    #[test]
    fn test_hash_deterministic() {
        let a = Transaction::new("aaa", dec!(10), 42, "prev");
        let b = Transaction::new("aaa", dec!(10), 42, "prev");
        assert_eq!(a, b);
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn test_hash_changes_with_every_field() {
        let base = Transaction::new("aaa", dec!(10), 42, "prev");
        let variants = [
            Transaction::new("bbb", dec!(10), 42, "prev"),
            Transaction::new("aaa", dec!(11), 42, "prev"),
            Transaction::new("aaa", dec!(10), 43, "prev"),
            Transaction::new("aaa", dec!(10), 42, "other"),
        ];
        for variant in &variants {
            assert_ne!(base.hash(), variant.hash());
        }
    }

    #[test]
    fn test_amount_rendering_preserves_scale() {
        // 10 and 10.00 are equal decimals but distinct canonical strings,
        // so they must hash differently.
        let genesis = Transaction::genesis();
        let plain = Transaction::new("aaa", dec!(10), 0, genesis.hash());
        let scaled = Transaction::new("aaa", dec!(10.00), 0, genesis.hash());
        assert_eq!(plain.to_string(), format!("0:aaa:10:{}", genesis.hash()));
        assert_eq!(scaled.to_string(), format!("0:aaa:10.00:{}", genesis.hash()));
        assert_ne!(plain.hash(), scaled.hash());
        assert_eq!(
            scaled.hash(),
            "c184a90a8525a28fca04e28c1a1b0b36168720a331bd29946d21ac268dbea0a4"
        );
    }

    #[test]
    fn test_zero_amount_is_legal() {
        let tx = Transaction::new("aaa", Decimal::ZERO, 7, "prev");
        assert_eq!(tx.amount(), Decimal::ZERO);
        assert_eq!(tx.hash().len(), 64);
    }

    #[test]
    fn test_display_is_canonical_string() {
        let tx = Transaction::new("aaa", dec!(2.50), 99, "feed");
        assert_eq!(tx.to_string(), "99:aaa:2.50:feed");
    }

    #[test]
    fn test_validate_transaction() {
        let genesis = Transaction::genesis();
        let t1 = Transaction::new("aaa", dec!(10), 1, genesis.hash());
        let t2 = Transaction::new("aaa", dec!(5), 2, t1.hash());
        assert!(validate_transaction(&genesis, &t1));
        assert!(validate_transaction(&t1, &t2));
        // t2 does not chain off genesis directly.
        assert!(!validate_transaction(&genesis, &t2));
    }

    #[test]
    fn test_validate_transaction_rejects_edited_amount() {
        let genesis = Transaction::genesis();
        let t1 = Transaction::new("aaa", dec!(10), 1, genesis.hash());
        let valid = Transaction::new("aaa", dec!(5), 2, t1.hash());
        assert!(validate_transaction(&t1, &valid));

        // Edit the amount without recomputing the hash, as an in-place
        // tamperer would.
        let tampered = Transaction {
            amount: dec!(6),
            ..valid
        };
        assert!(!validate_transaction(&t1, &tampered));
    }

    #[test]
    fn test_serde_roundtrip() {
        let tx = Transaction::new("aaa", dec!(123.45), 7, "prev");
        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
    }

    #[test]
    fn test_serde_amount_is_exact_string() {
        let tx = Transaction::new("aaa", dec!(10.00), 0, "prev");
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"10.00\""), "amount not string-exact: {}", json);
    }
}
