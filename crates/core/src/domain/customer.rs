//! Bank customers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::{active_filter, contains_ignore_case};
use crate::store::{DeletePolicy, KeyMatch, Resource, Unique};

/// A customer, addressed by the store-derived customer number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    /// Surrogate id.
    pub customer_id: i32,
    /// `CUST` + zero-padded id, derived on create.
    pub customer_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email (unique at creation).
    pub email: String,
    /// Phone number.
    pub phone_number: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Zip code.
    pub zip_code: String,
    /// Gold, Silver, Bronze, ...
    pub customer_tier: String,
    /// Set by the store on create.
    pub registration_date: DateTime<Utc>,
    /// False once deactivated.
    pub is_active: bool,
    /// Know-your-customer review status.
    #[serde(rename = "kycStatus")]
    pub kyc_status: String,
}

/// Full-record update. Identity, registration and KYC fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerUpdate {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email. Uniqueness is not re-checked.
    pub email: String,
    /// Phone number.
    pub phone_number: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Zip code.
    pub zip_code: String,
    /// Tier.
    pub customer_tier: String,
}

/// Optional narrowing filters for customer search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSearch {
    /// Case-insensitive email substring.
    pub email: Option<String>,
    /// Phone substring.
    pub phone: Option<String>,
}

impl CustomerSearch {
    /// Returns true if the customer satisfies every given filter.
    #[must_use]
    pub fn matches(&self, customer: &Customer) -> bool {
        active_filter(self.email.as_deref())
            .is_none_or(|email| contains_ignore_case(&customer.email, email))
            && active_filter(self.phone.as_deref())
                .is_none_or(|phone| customer.phone_number.contains(phone))
    }
}

impl Customer {
    /// Formats the customer number for an id.
    #[must_use]
    pub fn number_for(id: i32) -> String {
        format!("CUST{id:06}")
    }

    /// Overwrites the mutable profile fields.
    pub fn apply_update(&mut self, update: CustomerUpdate) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.email = update.email;
        self.phone_number = update.phone_number;
        self.address = update.address;
        self.city = update.city;
        self.state = update.state;
        self.zip_code = update.zip_code;
        self.customer_tier = update.customer_tier;
    }
}

fn email(customer: &Customer) -> &str {
    &customer.email
}

impl Resource for Customer {
    const LABEL: &'static str = "Customer";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Deactivate;

    fn id(&self) -> i32 {
        self.customer_id
    }

    fn set_id(&mut self, id: i32) {
        self.customer_id = id;
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.customer_number)
    }

    fn unique_fields() -> Vec<Unique<Self>> {
        vec![Unique {
            field: email,
            matching: KeyMatch::Exact,
            message: "Customer with this email already exists",
        }]
    }

    fn derive_on_create(&mut self, now: DateTime<Utc>) {
        self.customer_number = Self::number_for(self.customer_id);
        self.registration_date = now;
        self.is_active = true;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "CUST000001")]
    #[case(42, "CUST000042")]
    #[case(123_456, "CUST123456")]
    fn test_number_for(#[case] id: i32, #[case] expected: &str) {
        assert_eq!(Customer::number_for(id), expected);
    }

    #[test]
    fn test_apply_update_leaves_identity_and_kyc() {
        let mut customer = Customer {
            customer_id: 7,
            customer_number: "CUST000007".into(),
            kyc_status: "Verified".into(),
            is_active: true,
            ..Customer::default()
        };
        customer.apply_update(CustomerUpdate {
            first_name: "Ada".into(),
            email: "ada@example.com".into(),
            customer_tier: "Gold".into(),
            ..CustomerUpdate::default()
        });

        assert_eq!(customer.first_name, "Ada");
        assert_eq!(customer.email, "ada@example.com");
        assert_eq!(customer.customer_number, "CUST000007");
        assert_eq!(customer.kyc_status, "Verified");
        assert!(customer.is_active);
    }

    #[test]
    fn test_search_is_conjunction() {
        let customer = Customer {
            email: "jane.smith@email.com".into(),
            phone_number: "555-0102".into(),
            ..Customer::default()
        };

        let by_email = CustomerSearch {
            email: Some("SMITH".into()),
            phone: None,
        };
        let both = CustomerSearch {
            email: Some("smith".into()),
            phone: Some("0101".into()),
        };
        let empty = CustomerSearch {
            email: Some(String::new()),
            phone: None,
        };

        assert!(by_email.matches(&customer));
        assert!(!both.matches(&customer));
        assert!(empty.matches(&customer));
    }

    #[test]
    fn test_kyc_status_wire_name() {
        let json = serde_json::to_value(Customer::default()).unwrap();
        assert!(json.get("kycStatus").is_some());
        assert!(json.get("customerNumber").is_some());
    }
}
