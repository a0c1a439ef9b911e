//! Credit inquiry port.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Looks up the base credit limit for a person.
///
/// # Implementations
///
/// - [`crate::infrastructure::credit::HttpCreditInquiry`] - Remote credit service over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditInquiry: Send + Sync {
    /// Returns the non-negative credit limit for the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the credit service cannot answer.
    async fn get_credit_limit(
        &self,
        firstname: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, AppError>;
}
