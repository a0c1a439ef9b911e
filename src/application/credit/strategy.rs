//! Credit-limit strategies, one per client classification.

use async_trait::async_trait;

use crate::domain::entities::{Classification, CreditDecision, User};
use crate::domain::ports::CreditInquiry;
use crate::error::AppError;

/// Computes a credit decision for a user.
///
/// Each strategy declares the [`Classification`] it serves; the registry
/// keys strategies by that classification's label.
#[async_trait]
pub trait CreditLimitStrategy: Send + Sync {
    fn classification(&self) -> Classification;

    /// # Errors
    ///
    /// Propagates credit inquiry failures unchanged.
    async fn compute_limit(
        &self,
        user: &User,
        inquiry: &dyn CreditInquiry,
    ) -> Result<CreditDecision, AppError>;
}

/// Fallback strategy: the inquiry result, as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCreditLimit;

#[async_trait]
impl CreditLimitStrategy for DefaultCreditLimit {
    fn classification(&self) -> Classification {
        Classification::Unclassified
    }

    async fn compute_limit(
        &self,
        user: &User,
        inquiry: &dyn CreditInquiry,
    ) -> Result<CreditDecision, AppError> {
        let credit_limit = inquiry
            .get_credit_limit(&user.firstname, &user.surname, user.date_of_birth)
            .await?;

        Ok(CreditDecision::limited(credit_limit))
    }
}

/// Important clients get twice the inquiry result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportantClientCreditLimit;

#[async_trait]
impl CreditLimitStrategy for ImportantClientCreditLimit {
    fn classification(&self) -> Classification {
        Classification::ImportantClient
    }

    async fn compute_limit(
        &self,
        user: &User,
        inquiry: &dyn CreditInquiry,
    ) -> Result<CreditDecision, AppError> {
        let credit_limit = inquiry
            .get_credit_limit(&user.firstname, &user.surname, user.date_of_birth)
            .await?;

        Ok(CreditDecision::limited(credit_limit.saturating_mul(2)))
    }
}

/// Very important clients have no credit limit and skip the inquiry.
#[derive(Debug, Clone, Copy, Default)]
pub struct VeryImportantClientCreditLimit;

#[async_trait]
impl CreditLimitStrategy for VeryImportantClientCreditLimit {
    fn classification(&self) -> Classification {
        Classification::VeryImportantClient
    }

    async fn compute_limit(
        &self,
        _user: &User,
        _inquiry: &dyn CreditInquiry,
    ) -> Result<CreditDecision, AppError> {
        Ok(CreditDecision::unlimited())
    }
}
