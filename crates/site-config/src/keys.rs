//! Names shared between the server and the client.

/// Cookie carrying the runtime coming-soon override (`"true"` / `"false"`).
pub const GATING_COOKIE: &str = "portfolio_coming_soon";

/// Cookie marking an authenticated admin session (`"true"`).
pub const ADMIN_SESSION_COOKIE: &str = "portfolio_admin_auth";

/// Browser-local key recording that the welcome ritual has been seen.
pub const WELCOME_SEEN_KEY: &str = "portfolio-welcome-shown";

/// Path of the gating ("coming soon") page.
pub const GATING_PATH: &str = "/coming-soon";

/// Parse a boolean-as-string value the way every cookie and storage key stores it.
///
/// Only the exact strings `"true"` and `"false"` are recognized.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Render a boolean the way it is persisted.
pub fn flag_value(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
