//! DTOs for the user admission endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AdmissionRequest, Classification, RejectionReason, User};

/// Request body for `POST /api/users`.
#[derive(Debug, Deserialize)]
pub struct AdmitUserRequest {
    pub firstname: String,
    pub surname: String,
    pub email: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
    pub client_id: i32,
}

impl From<AdmitUserRequest> for AdmissionRequest {
    fn from(request: AdmitUserRequest) -> Self {
        Self {
            firstname: request.firstname,
            surname: request.surname,
            email: request.email,
            date_of_birth: request.date_of_birth,
            client_id: request.client_id,
        }
    }
}

/// Response body for an admission attempt.
///
/// `user` is present only when admitted; `reason` only when rejected.
#[derive(Debug, Serialize)]
pub struct AdmitUserResponse {
    pub admitted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AdmittedUser>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionInfo>,
}

impl AdmitUserResponse {
    pub fn admitted(user: &User) -> Self {
        Self {
            admitted: true,
            user: Some(AdmittedUser::from(user)),
            reason: None,
        }
    }

    pub fn rejected(reason: &RejectionReason) -> Self {
        Self {
            admitted: false,
            user: None,
            reason: Some(RejectionInfo {
                code: reason.code(),
                message: reason.to_string(),
            }),
        }
    }
}

/// Public view of an admitted user.
#[derive(Debug, Serialize)]
pub struct AdmittedUser {
    pub firstname: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: i32,
    pub classification: Classification,
    pub has_credit_limit: bool,
    pub credit_limit: i64,
}

impl From<&User> for AdmittedUser {
    fn from(user: &User) -> Self {
        Self {
            firstname: user.firstname.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            date_of_birth: user.date_of_birth,
            client_id: user.client.id,
            classification: user.client.classification(),
            has_credit_limit: user.has_credit_limit,
            credit_limit: user.credit_limit,
        }
    }
}

/// Machine-readable rejection reason.
#[derive(Debug, Serialize)]
pub struct RejectionInfo {
    pub code: &'static str,
    pub message: String,
}
