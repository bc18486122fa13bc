//! Cookie issuing and reading for the gating override and the admin session

use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use site_config::keys::{self, ADMIN_SESSION_COOKIE, GATING_COOKIE};

/// Lifetime of the gating override cookie
const GATING_COOKIE_MAX_AGE_DAYS: i64 = 365;

/// How cookies are issued in this deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CookiePolicy {
    /// Mark cookies `Secure` (production only)
    pub secure: bool,
}

impl CookiePolicy {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// `portfolio_coming_soon=<enabled>`: site-wide, one year, client-readable, strict same-site
    pub fn gating_cookie(&self, enabled: bool) -> Cookie<'static> {
        Cookie::build((GATING_COOKIE, keys::flag_value(enabled)))
            .path("/")
            .max_age(time::Duration::days(GATING_COOKIE_MAX_AGE_DAYS))
            .http_only(false)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .build()
    }

    /// `portfolio_admin_auth=true`: site-wide, no expiry
    pub fn admin_session_cookie(&self) -> Cookie<'static> {
        Cookie::build((ADMIN_SESSION_COOKIE, "true")).path("/").build()
    }

    /// Cookie whose removal clears the admin session
    pub fn admin_session_removal(&self) -> Cookie<'static> {
        Cookie::build((ADMIN_SESSION_COOKIE, "")).path("/").build()
    }
}

/// Raw admin session cookie value, if any
pub fn admin_session_value(jar: &CookieJar) -> Option<&str> {
    jar.get(ADMIN_SESSION_COOKIE).map(|cookie| cookie.value())
}

/// Whether the request carries a valid admin session
pub fn has_admin_session(jar: &CookieJar) -> bool {
    admin_session_value(jar) == Some("true")
}

/// Runtime gating override, if the cookie is present and well-formed
pub fn gating_override(jar: &CookieJar) -> Option<bool> {
    jar.get(GATING_COOKIE)
        .and_then(|cookie| keys::parse_flag(cookie.value()))
}
