//! Admin session handlers

use crate::admin::{self, LoginOutcome};
use crate::api::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use super::{decode_object, ObjectBody};

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Generic success response
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Verify the admin secret and issue the session cookie
#[tracing::instrument(skip_all)]
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: ObjectBody,
) -> ApiResult<(CookieJar, Json<SuccessResponse>)> {
    let request: LoginRequest = decode_object(payload)?;

    match admin::login(&state.credential, &state.cookies, jar, &request.password) {
        (jar, LoginOutcome::Granted) => {
            tracing::info!("Admin session started");
            Ok((jar, Json(SuccessResponse { success: true })))
        }
        (_, LoginOutcome::Denied) => {
            tracing::warn!("Admin login rejected");
            Err(ApiError::Unauthorized("Incorrect password".to_string()))
        }
    }
}

/// Clear the admin session cookie
pub async fn admin_logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    tracing::info!("Admin session ended");
    (
        admin::logout(&state.cookies, jar),
        Json(SuccessResponse { success: true }),
    )
}
