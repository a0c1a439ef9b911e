//! Credit decision value produced by credit-limit strategies.

use serde::Serialize;

/// Credit eligibility pair computed for a user.
///
/// `credit_limit` only carries meaning when `has_credit_limit` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CreditDecision {
    pub has_credit_limit: bool,
    pub credit_limit: i64,
}

impl CreditDecision {
    /// A decision that caps the user at `credit_limit`.
    pub fn limited(credit_limit: i64) -> Self {
        Self {
            has_credit_limit: true,
            credit_limit,
        }
    }

    /// A decision with no credit limit at all.
    pub fn unlimited() -> Self {
        Self {
            has_credit_limit: false,
            credit_limit: 0,
        }
    }
}
