//! Page handlers
//!
//! The real pages are rendered elsewhere; these placeholders give the edge
//! gate something to continue into and show the countdown on the gating page.

use crate::api::AppState;
use axum::{extract::State, http::Uri, response::Html};

/// Gating page with the launch countdown
pub async fn coming_soon_page(State(state): State<AppState>) -> Html<String> {
    let countdown = state.site.countdown();
    let links = &state.site.social_links;

    Html(format!(
        "<!doctype html>\n<html><head><title>Coming soon</title></head><body>\
         <main data-page=\"coming-soon\">\
         <h1>Coming soon</h1>\
         <p data-countdown=\"{remaining}\">{days}d {hours}h {minutes}m {seconds}s</p>\
         <nav><a href=\"{twitter}\">Twitter</a> <a href=\"{linkedin}\">LinkedIn</a> \
         <a href=\"{github}\">GitHub</a> <a href=\"/contact\">Contact</a></nav>\
         </main></body></html>",
        remaining = countdown.remaining_ms,
        days = countdown.days,
        hours = countdown.hours,
        minutes = countdown.minutes,
        seconds = countdown.seconds,
        twitter = escape(&links.twitter),
        linkedin = escape(&links.linkedin),
        github = escape(&links.github),
    ))
}

/// Placeholder for any content page that passed the edge gate
pub async fn content_page(uri: Uri) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html><body><main data-page=\"content\" data-path=\"{path}\"></main></body></html>",
        path = escape(uri.path()),
    ))
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
