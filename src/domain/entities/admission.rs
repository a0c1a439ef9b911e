//! Admission request and outcome types.

use chrono::NaiveDate;
use serde::Deserialize;

use super::User;

/// Identity data submitted for admission.
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionRequest {
    pub firstname: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: i32,
}

/// Why an admission was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    #[error("First name and surname must both be provided")]
    InvalidFullName,

    #[error("Email address must contain '@' or '.'")]
    InvalidEmail,

    #[error("User must be at least {minimum_age} years old")]
    Underage { minimum_age: i32 },

    #[error("Client {client_id} does not exist")]
    ClientNotFound { client_id: i32 },

    #[error("Credit limit {credit_limit} is below the minimum of {minimum}")]
    CreditLimitTooLow { credit_limit: i64, minimum: i64 },
}

impl RejectionReason {
    /// Stable machine-readable code, used in API responses and metrics labels.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFullName => "invalid_full_name",
            Self::InvalidEmail => "invalid_email",
            Self::Underage { .. } => "underage",
            Self::ClientNotFound { .. } => "client_not_found",
            Self::CreditLimitTooLow { .. } => "credit_limit_too_low",
        }
    }
}

/// Result of a single admission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// The user passed every check and was handed to the user store.
    Admitted(User),
    /// The user was refused; nothing was persisted.
    Rejected(RejectionReason),
}

impl AdmissionOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_codes_are_distinct() {
        let reasons = [
            RejectionReason::InvalidFullName,
            RejectionReason::InvalidEmail,
            RejectionReason::Underage { minimum_age: 21 },
            RejectionReason::ClientNotFound { client_id: 1 },
            RejectionReason::CreditLimitTooLow {
                credit_limit: 499,
                minimum: 500,
            },
        ];

        let codes: std::collections::HashSet<_> = reasons.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), reasons.len());
    }

    #[test]
    fn test_rejection_message() {
        let reason = RejectionReason::CreditLimitTooLow {
            credit_limit: 499,
            minimum: 500,
        };
        assert_eq!(
            reason.to_string(),
            "Credit limit 499 is below the minimum of 500"
        );
    }
}
