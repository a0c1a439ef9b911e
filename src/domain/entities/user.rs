//! User entity built during admission.

use chrono::NaiveDate;

use super::{Client, CreditDecision};

/// A user being admitted.
///
/// Built by the admission service from validated input and the fetched
/// client, then handed by value to the user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub firstname: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client: Client,
    pub has_credit_limit: bool,
    pub credit_limit: i64,
}

impl User {
    /// Creates a user with no credit decision applied yet.
    pub fn new(
        firstname: String,
        surname: String,
        email: String,
        date_of_birth: NaiveDate,
        client: Client,
    ) -> Self {
        Self {
            firstname,
            surname,
            email,
            date_of_birth,
            client,
            has_credit_limit: false,
            credit_limit: 0,
        }
    }

    pub fn apply_credit_decision(&mut self, decision: CreditDecision) {
        self.has_credit_limit = decision.has_credit_limit;
        self.credit_limit = decision.credit_limit;
    }

    pub fn credit_decision(&self) -> CreditDecision {
        CreditDecision {
            has_credit_limit: self.has_credit_limit,
            credit_limit: self.credit_limit,
        }
    }
}
