//! Edge gate: the request-interception layer
//!
//! Runs in front of every page handler and decides, per request, whether the
//! visitor continues to the page or is sent to the gating page. The decision
//! is a pure function of the request path, the static coming-soon switch and
//! the admin session cookie; it never reads the gating override cookie.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use site_config::keys::GATING_PATH;

use crate::api::AppState;
use crate::cookies;

/// Path prefixes that are always served unmodified
pub const DEFAULT_ALLOW_LIST: &[&str] = &[
    GATING_PATH,
    "/contact",
    "/admin",
    "/api",
    "/_next",
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
];

/// Requests under these prefixes never reach the gate at all
const UNINTERCEPTED: &[&str] = &["/_next/static", "/_next/image", "/favicon.ico"];

/// Outcome of the gate for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Serve the request unmodified
    Continue,

    /// Send the visitor to the given path
    Redirect(&'static str),
}

/// Prefix-matched set of exempt paths
#[derive(Debug, Clone)]
pub struct AllowList {
    prefixes: Vec<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOW_LIST.iter().copied())
    }
}

impl AllowList {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// A path is exempt if it equals a prefix or continues it with `/`
    pub fn permits(&self, path: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| prefix_matches(prefix, path))
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Whether a request path is subject to the gate at all
pub fn is_intercepted(path: &str) -> bool {
    !UNINTERCEPTED
        .iter()
        .any(|prefix| prefix_matches(prefix, path))
}

/// Decide redirect vs continue for one request
///
/// Anything other than the exact cookie value `"true"` counts as "not admin".
pub fn decide(
    allow_list: &AllowList,
    path: &str,
    coming_soon_mode: bool,
    admin_cookie: Option<&str>,
) -> GateDecision {
    let is_admin = admin_cookie == Some("true");

    if coming_soon_mode && !allow_list.permits(path) && !is_admin {
        GateDecision::Redirect(GATING_PATH)
    } else {
        GateDecision::Continue
    }
}

/// Middleware applying [`decide`] to every intercepted request
pub async fn edge_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if !is_intercepted(&path) {
        return next.run(request).await;
    }

    let admin_cookie = cookies::admin_session_value(&jar);
    match decide(
        &state.allow_list,
        &path,
        state.site.coming_soon_mode,
        admin_cookie,
    ) {
        GateDecision::Continue => next.run(request).await,
        GateDecision::Redirect(target) => {
            tracing::debug!(path = %path, target = %target, "Redirecting to gating page");
            Redirect::temporary(target).into_response()
        }
    }
}
