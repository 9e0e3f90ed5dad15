//! Bank accounts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::eq_ignore_case;
use crate::store::{DeletePolicy, KeyMatch, Resource, Unique};

/// A customer account, addressed by its account number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    /// Surrogate id.
    pub account_id: i32,
    /// Account number (natural key).
    pub account_number: String,
    /// Savings, Checking, Business, ...
    pub account_type: String,
    /// Holder name. Not linked to a customer record.
    pub customer_name: String,
    /// Current balance.
    pub balance: Decimal,
    /// Currency code.
    pub currency: String,
    /// Set by the store on create.
    pub opened_date: DateTime<Utc>,
    /// Free-form status, e.g. `Active` or `Frozen`.
    pub status: String,
    /// Owning branch. Not validated.
    pub branch_id: i32,
    /// Whether the account is active.
    pub is_active: bool,
}

impl Account {
    /// Sets the status; the account is active exactly when the status is `Active`.
    pub fn set_status(&mut self, status: String) {
        self.is_active = eq_ignore_case(&status, "Active");
        self.status = status;
    }
}

fn account_number(account: &Account) -> &str {
    &account.account_number
}

impl Resource for Account {
    const LABEL: &'static str = "Account";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Remove;

    fn id(&self) -> i32 {
        self.account_id
    }

    fn set_id(&mut self, id: i32) {
        self.account_id = id;
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.account_number)
    }

    fn unique_fields() -> Vec<Unique<Self>> {
        vec![Unique {
            field: account_number,
            matching: KeyMatch::Exact,
            message: "Account number already exists",
        }]
    }

    fn derive_on_create(&mut self, now: DateTime<Utc>) {
        self.opened_date = now;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
