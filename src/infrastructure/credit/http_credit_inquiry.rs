//! HTTP client for the remote credit service.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::domain::ports::CreditInquiry;
use crate::error::AppError;

/// Body returned by `GET /credit-limit`.
#[derive(Debug, Deserialize)]
pub struct CreditLimitResponse {
    pub credit_limit: i64,
}

/// [`CreditInquiry`] backed by the credit service's REST endpoint.
///
/// Issues `GET {base_url}/credit-limit?firstname=..&surname=..&date_of_birth=YYYY-MM-DD`.
pub struct HttpCreditInquiry {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCreditInquiry {
    /// Creates a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::internal(
                    "Failed to create HTTP client",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(Self {
            client,
            endpoint: credit_limit_endpoint(base_url),
        })
    }
}

fn credit_limit_endpoint(base_url: &str) -> String {
    format!("{}/credit-limit", base_url.trim_end_matches('/'))
}

fn validate_limit(response: CreditLimitResponse) -> Result<i64, AppError> {
    if response.credit_limit < 0 {
        return Err(AppError::upstream(
            "Credit service returned a negative limit",
            json!({ "credit_limit": response.credit_limit }),
        ));
    }

    Ok(response.credit_limit)
}

#[async_trait]
impl CreditInquiry for HttpCreditInquiry {
    async fn get_credit_limit(
        &self,
        firstname: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, AppError> {
        let date_of_birth = date_of_birth.format("%Y-%m-%d").to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("firstname", firstname),
                ("surname", surname),
                ("date_of_birth", date_of_birth.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Credit service request failed");
                AppError::upstream(
                    "Credit service unavailable",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Credit service returned an error status");
            return Err(AppError::upstream(
                "Credit service returned an error",
                json!({ "status": status.as_u16() }),
            ));
        }

        let body: CreditLimitResponse = response.json().await.map_err(|e| {
            AppError::upstream(
                "Invalid credit service response",
                json!({ "reason": e.to_string() }),
            )
        })?;

        validate_limit(body)
    }
}
