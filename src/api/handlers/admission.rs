//! Handler for the user admission endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use serde_json::json;

use crate::api::dto::admission::{AdmitUserRequest, AdmitUserResponse};
use crate::domain::entities::AdmissionOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Attempts to admit a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "firstname": "Anatoliy",
///   "surname": "Kutukov",
///   "email": "ka_2005@mail.ru",
///   "date_of_birth": "1979-07-15",
///   "client_id": 1
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: User admitted and stored
/// - **400 Bad Request**: Body is not valid JSON or does not match the request shape
/// - **422 Unprocessable Entity**: User rejected; body carries the reason code
/// - **502 Bad Gateway**: Credit service failure
/// - **500 Internal Server Error**: Database failure
pub async fn admit_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdmitUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AdmitUserResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            rejection.body_text(),
            json!({ "status": rejection.status().as_u16() }),
        )
    })?;

    let outcome = state.admission_service.admit(payload.into()).await?;

    let response = match &outcome {
        AdmissionOutcome::Admitted(user) => {
            (StatusCode::CREATED, Json(AdmitUserResponse::admitted(user)))
        }
        AdmissionOutcome::Rejected(reason) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(AdmitUserResponse::rejected(reason)),
        ),
    };

    Ok(response)
}
