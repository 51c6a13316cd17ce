//! Account - named views over the shared ledger with operation rules

use crate::error::AccountError;
use chainbank_ledger::{SharedLedger, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Lifecycle state of an account.
///
/// Blocking is one-way: there is no operation that returns a blocked
/// account to service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Blocked,
}

impl AccountStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

/// A participant on the shared ledger.
///
/// The account stores no balance of its own; it owns its generated id, a
/// display name, its status and a handle to the ledger every account
/// writes to. Chain entries are keyed by the id, so two accounts can share
/// a display name without sharing funds. All money movement goes through
/// [`deposit`](Account::deposit), [`withdraw`](Account::withdraw) and
/// [`transfer`](Account::transfer), which check preconditions in a fixed
/// order: status first, then amount sign, then funds. A rejected operation
/// appends nothing.
#[derive(Debug)]
pub struct Account {
    id: String,
    name: String,
    status: AccountStatus,
    ledger: SharedLedger,
}

impl Account {
    /// Open an active account on `ledger` with a fresh unique id.
    ///
    /// Opening writes no chain entry; an account exists on the chain only
    /// once it has transacted.
    pub fn open(name: impl Into<String>, ledger: SharedLedger) -> Self {
        let account = Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            status: AccountStatus::Active,
            ledger,
        };
        tracing::debug!(account = %account.name, id = %account.id, "account opened");
        account
    }

    /// The owner key on every chain entry this account creates.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label; not used for chain ownership.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_blocked(&self) -> bool {
        !self.status.is_active()
    }

    /// Block the account. Idempotent; history on the chain is untouched.
    pub fn block(&mut self) {
        self.status = AccountStatus::Blocked;
        tracing::info!(account = %self.name, id = %self.id, "account blocked");
    }

    /// Net balance: replayed from the chain on demand, never cached.
    pub fn balance(&self) -> Decimal {
        self.ledger.balance_of(&self.id)
    }

    /// This account's chain entries, oldest first.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ledger.transactions_of(&self.id)
    }

    /// Credit `amount` to this account.
    ///
    /// Fails if the account is blocked or `amount` is not strictly
    /// positive. On success, one positive entry is appended to the chain.
    pub fn deposit(&self, amount: Decimal) -> Result<Transaction, AccountError> {
        self.ensure_active()?;
        ensure_positive(amount)?;
        Ok(self.ledger.append(&self.id, amount))
    }

    /// Debit `amount` from this account.
    ///
    /// Fails if the account is blocked, `amount` is not strictly positive,
    /// or the current balance is below `amount`. On success, one negative
    /// entry is appended to the chain.
    pub fn withdraw(&self, amount: Decimal) -> Result<Transaction, AccountError> {
        self.ensure_active()?;
        ensure_positive(amount)?;
        let available = self.balance();
        if available < amount {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        Ok(self.ledger.append(&self.id, -amount))
    }

    /// Move `amount` from this account into `to`.
    ///
    /// Two chain entries: a withdrawal here, then a deposit on `to`. The
    /// legs are not atomic. The withdrawal commits on its own, so if the
    /// deposit leg is rejected (blocked recipient) the debit stays on the
    /// chain and the credit leg's error is returned.
    pub fn transfer(&self, to: &Account, amount: Decimal) -> Result<(), AccountError> {
        self.withdraw(amount)?;
        to.deposit(amount)?;
        tracing::debug!(from = %self.name, to = %to.name, %amount, "transfer complete");
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), AccountError> {
        if self.status.is_active() {
            Ok(())
        } else {
            Err(AccountError::AccountBlocked {
                name: self.name.clone(),
            })
        }
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), AccountError> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(AccountError::NonPositiveAmount(amount))
    }
}

impl fmt::Display for Account {
    /// `{name} has {balance}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {}", self.name, self.balance())
    }
}
