//! Coming-soon status and toggle handlers

use crate::admin;
use crate::api::AppState;
use crate::cookies;
use crate::error::{ApiError, ApiResult};
use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use super::{decode_object, ObjectBody};

/// Coming-soon status response
#[derive(Debug, Serialize, Deserialize)]
pub struct ComingSoonStatusResponse {
    pub enabled: bool,
    pub success: bool,
}

/// Report the visitor-facing coming-soon state
///
/// The override cookie wins when present; otherwise the static switch.
pub async fn coming_soon_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Json<ComingSoonStatusResponse> {
    Json(ComingSoonStatusResponse {
        enabled: admin::status(&state.site, &jar),
        success: true,
    })
}

/// Toggle request
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub enabled: bool,
}

/// Toggle response
#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
    pub enabled: bool,
}

/// Persist the coming-soon override cookie
#[tracing::instrument(skip_all)]
pub async fn toggle_coming_soon(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: ObjectBody,
) -> ApiResult<(CookieJar, Json<ToggleResponse>)> {
    if state.guard_toggle && !cookies::has_admin_session(&jar) {
        return Err(ApiError::Unauthorized("Admin session required".to_string()));
    }

    let request: ToggleRequest = decode_object(payload)?;
    let jar = admin::toggle(&state.cookies, jar, request.enabled);

    tracing::info!(enabled = request.enabled, "Coming-soon override updated");

    Ok((
        jar,
        Json(ToggleResponse {
            success: true,
            enabled: request.enabled,
        }),
    ))
}
