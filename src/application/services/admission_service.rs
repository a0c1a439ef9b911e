//! User admission service.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::credit::StrategyRegistry;
use crate::domain::entities::{AdmissionOutcome, AdmissionRequest, RejectionReason, User};
use crate::domain::ports::{Clock, CreditInquiry};
use crate::domain::repositories::{ClientRepository, UserStore};
use crate::domain::validation::{
    MINIMUM_AGE, MINIMUM_CREDIT_LIMIT, has_valid_email, has_valid_full_name, is_at_least,
    rejects_on_low_limit,
};
use crate::error::AppError;

/// Decides whether a prospective user may be admitted and persists admitted users.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. full name, email and minimum age
/// 2. client lookup
/// 3. classification-driven credit limit
/// 4. minimum credit limit
///
/// The user store is only called when every check passes. Collaborator
/// failures are returned as [`AppError`] without retries.
pub struct AdmissionService {
    client_repository: Arc<dyn ClientRepository>,
    user_store: Arc<dyn UserStore>,
    credit_inquiry: Arc<dyn CreditInquiry>,
    clock: Arc<dyn Clock>,
    strategies: Arc<StrategyRegistry>,
}

impl AdmissionService {
    /// Creates a new admission service.
    pub fn new(
        client_repository: Arc<dyn ClientRepository>,
        user_store: Arc<dyn UserStore>,
        credit_inquiry: Arc<dyn CreditInquiry>,
        clock: Arc<dyn Clock>,
        strategies: Arc<StrategyRegistry>,
    ) -> Self {
        Self {
            client_repository,
            user_store,
            credit_inquiry,
            clock,
            strategies,
        }
    }

    /// Runs the admission pipeline for one request.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's [`AppError`] if the client lookup, credit
    /// inquiry or user store fails. Business rejections are `Ok`.
    pub async fn admit(&self, request: AdmissionRequest) -> Result<AdmissionOutcome, AppError> {
        let outcome = self.run(request).await?;

        let label = match &outcome {
            AdmissionOutcome::Admitted(_) => "admitted",
            AdmissionOutcome::Rejected(reason) => reason.code(),
        };
        metrics::counter!("admission_decisions_total", "outcome" => label).increment(1);

        Ok(outcome)
    }

    /// Boolean form of [`Self::admit`]: `true` iff the user was admitted and stored.
    ///
    /// # Errors
    ///
    /// See [`Self::admit`].
    pub async fn try_admit(
        &self,
        firstname: &str,
        surname: &str,
        email: &str,
        date_of_birth: NaiveDate,
        client_id: i32,
    ) -> Result<bool, AppError> {
        let request = AdmissionRequest {
            firstname: firstname.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            date_of_birth,
            client_id,
        };

        Ok(self.admit(request).await?.is_admitted())
    }

    async fn run(&self, request: AdmissionRequest) -> Result<AdmissionOutcome, AppError> {
        if let Some(reason) = self.check_identity(&request) {
            tracing::debug!(reason = reason.code(), "Admission rejected on input");
            return Ok(AdmissionOutcome::Rejected(reason));
        }

        let Some(client) = self.client_repository.get_by_id(request.client_id).await? else {
            tracing::debug!(client_id = request.client_id, "Admission rejected: unknown client");
            return Ok(AdmissionOutcome::Rejected(RejectionReason::ClientNotFound {
                client_id: request.client_id,
            }));
        };

        let mut user = User::new(
            request.firstname,
            request.surname,
            request.email,
            request.date_of_birth,
            client,
        );

        let strategy = self.strategies.resolve(&user.client.name);
        let decision = strategy
            .compute_limit(&user, self.credit_inquiry.as_ref())
            .await?;
        user.apply_credit_decision(decision);

        tracing::debug!(
            client_id = user.client.id,
            classification = ?strategy.classification(),
            has_credit_limit = user.has_credit_limit,
            credit_limit = user.credit_limit,
            "Credit decision computed"
        );

        if rejects_on_low_limit(user.has_credit_limit, user.credit_limit, MINIMUM_CREDIT_LIMIT) {
            return Ok(AdmissionOutcome::Rejected(
                RejectionReason::CreditLimitTooLow {
                    credit_limit: user.credit_limit,
                    minimum: MINIMUM_CREDIT_LIMIT,
                },
            ));
        }

        self.user_store.add_user(user.clone()).await?;

        tracing::info!(
            client_id = user.client.id,
            has_credit_limit = user.has_credit_limit,
            credit_limit = user.credit_limit,
            "User admitted"
        );

        Ok(AdmissionOutcome::Admitted(user))
    }

    /// First failing identity rule, if any.
    fn check_identity(&self, request: &AdmissionRequest) -> Option<RejectionReason> {
        if !has_valid_full_name(&request.firstname, &request.surname) {
            return Some(RejectionReason::InvalidFullName);
        }

        if !has_valid_email(&request.email) {
            return Some(RejectionReason::InvalidEmail);
        }

        if !is_at_least(MINIMUM_AGE, request.date_of_birth, self.clock.today()) {
            return Some(RejectionReason::Underage {
                minimum_age: MINIMUM_AGE,
            });
        }

        None
    }
}
