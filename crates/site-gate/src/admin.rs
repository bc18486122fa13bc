//! Admin override
//!
//! A single shared secret guards the admin session. A successful login sets
//! the admin session cookie, which exempts the bearer from the edge gate.
//! Independently, the toggle writes the gating override cookie that only the
//! status operation reads; neither the edge gate nor the static site
//! configuration are affected by it.

use axum_extra::extract::CookieJar;
use site_config::SiteConfig;
use subtle::ConstantTimeEq;

use crate::cookies::{self, CookiePolicy};

/// Shared admin secret
///
/// With no secret configured every login attempt is refused.
#[derive(Clone, Default)]
pub struct AdminCredential {
    secret: Option<String>,
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl AdminCredential {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Constant-time comparison against the configured secret
    pub fn verify(&self, candidate: &str) -> bool {
        match &self.secret {
            Some(secret) => secret.as_bytes().ct_eq(candidate.as_bytes()).into(),
            None => false,
        }
    }
}

/// Result of a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    Denied,
}

/// Check `password` and, on success, add the admin session cookie to `jar`
///
/// On denial the jar is returned untouched.
pub fn login(
    credential: &AdminCredential,
    policy: &CookiePolicy,
    jar: CookieJar,
    password: &str,
) -> (CookieJar, LoginOutcome) {
    if !credential.verify(password) {
        if !credential.is_configured() {
            tracing::warn!("Admin login attempted but no admin password is configured");
        }
        return (jar, LoginOutcome::Denied);
    }

    (jar.add(policy.admin_session_cookie()), LoginOutcome::Granted)
}

/// Clear the admin session cookie
pub fn logout(policy: &CookiePolicy, jar: CookieJar) -> CookieJar {
    jar.remove(policy.admin_session_removal())
}

/// Visitor-facing coming-soon state: the override cookie if present, else the static switch
pub fn status(site: &SiteConfig, jar: &CookieJar) -> bool {
    cookies::gating_override(jar).unwrap_or(site.coming_soon_mode)
}

/// Persist the coming-soon override
///
/// Authorization is the caller's responsibility.
pub fn toggle(policy: &CookiePolicy, jar: CookieJar, enabled: bool) -> CookieJar {
    jar.add(policy.gating_cookie(enabled))
}
