//! Site metadata handler

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use site_config::{Countdown, SocialLinks};

/// Public site metadata, as consumed by the gating page and the footer
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfoResponse {
    pub coming_soon_mode: bool,
    pub launch_date: i64,
    pub social_links: SocialLinks,
    pub countdown: Countdown,
}

/// Static site metadata plus the live countdown
pub async fn site_info(State(state): State<AppState>) -> Json<SiteInfoResponse> {
    Json(SiteInfoResponse {
        coming_soon_mode: state.site.coming_soon_mode,
        launch_date: state.site.launch_date,
        social_links: state.site.social_links.clone(),
        countdown: state.site.countdown(),
    })
}
