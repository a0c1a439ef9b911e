//! API route configuration.

use crate::api::handlers::admit_user_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /users` - Attempt to admit a new user
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/users", post(admit_user_handler))
}
