//! Money transfers, deposits and withdrawals awaiting or past approval.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::{DeletePolicy, Resource, StoreError, StoreResult};

/// Transaction status.
///
/// The valid transitions are:
/// - Pending → Completed (approve)
/// - Pending → Rejected (reject)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Awaiting approval.
    #[default]
    Pending,
    /// Approved and settled.
    Completed,
    /// Rejected with a reason.
    Rejected,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction, addressed by the store-derived transaction number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    /// Surrogate id.
    pub transaction_id: i32,
    /// `TXN` + zero-padded id, derived on create.
    pub transaction_number: String,
    /// Set by the store on create.
    pub transaction_date: DateTime<Utc>,
    /// Source account number. Not validated.
    pub from_account: String,
    /// Destination account number. Not validated.
    pub to_account: String,
    /// Amount; must be positive.
    pub amount: Decimal,
    /// Transfer, Deposit, Withdrawal, ...
    pub transaction_type: String,
    /// Free-form description; a rejection appends its reason here.
    pub description: String,
    /// Lifecycle status.
    pub status: TransactionStatus,
    /// Who initiated it.
    pub initiated_by: String,
    /// Who approved it.
    pub approved_by: String,
}

impl Transaction {
    /// Formats the transaction number for an id.
    #[must_use]
    pub fn number_for(id: i32) -> String {
        format!("TXN{id:06}")
    }

    /// Returns true if either side of the transaction is the given account.
    #[must_use]
    pub fn involves(&self, account_number: &str) -> bool {
        self.from_account == account_number || self.to_account == account_number
    }

    /// Approves a pending transaction.
    pub fn approve(&mut self, approved_by: String) -> StoreResult<()> {
        self.ensure_pending()?;
        self.status = TransactionStatus::Completed;
        self.approved_by = approved_by;
        Ok(())
    }

    /// Rejects a pending transaction, recording the reason in the description.
    pub fn reject(&mut self, reason: &str) -> StoreResult<()> {
        self.ensure_pending()?;
        self.status = TransactionStatus::Rejected;
        self.description.push_str(" | Rejection Reason: ");
        self.description.push_str(reason);
        Ok(())
    }

    fn ensure_pending(&self) -> StoreResult<()> {
        if self.status == TransactionStatus::Pending {
            Ok(())
        } else {
            Err(StoreError::InvalidArgument(format!(
                "Transaction {} is {} and can no longer change status",
                self.transaction_number, self.status
            )))
        }
    }
}

impl Resource for Transaction {
    const LABEL: &'static str = "Transaction";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Never;

    fn id(&self) -> i32 {
        self.transaction_id
    }

    fn set_id(&mut self, id: i32) {
        self.transaction_id = id;
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.transaction_number)
    }

    fn validate(&self) -> StoreResult<()> {
        if self.amount <= Decimal::ZERO {
            return Err(StoreError::InvalidArgument(
                "Transaction amount must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn derive_on_create(&mut self, now: DateTime<Utc>) {
        self.transaction_number = Self::number_for(self.transaction_id);
        self.transaction_date = now;
        self.status = TransactionStatus::Pending;
    }
}
