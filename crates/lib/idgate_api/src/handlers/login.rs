//! Login request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use idgate_core::login::LoginResult;

use crate::AppState;
use crate::error::AppResult;
use crate::models::LoginRequest;

/// `POST /api/login` — record a login for an identifier, creating or
/// updating the digital identity (and linked services card, when supplied).
/// Responds `204 No Content`; side effects are the outcome.
pub async fn perform_login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<StatusCode> {
    state
        .login
        .perform_login(&body.identifier_type, &body.identifier_value, body.services_card)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/login/{identifier_type}/{identifier_value}` — look up an
/// existing login and return the composite result.
pub async fn login_entity_handler(
    State(state): State<AppState>,
    Path((identifier_type, identifier_value)): Path<(String, String)>,
) -> AppResult<Json<LoginResult>> {
    let resp = state
        .login
        .login_entity(&identifier_type, &identifier_value)
        .await?;
    Ok(Json(resp))
}
